// src/noyau/bouton.rs
//
// Boutons du pavé : libellé, rôle (sémantique) et catégorie (visuelle).
// La vue ne lit que `categorie` ; le noyau ne lit que `role` et `libelle`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bouton {
    Zero,
    Un,
    Deux,
    Trois,
    Quatre,
    Cinq,
    Six,
    Sept,
    Huit,
    Neuf,
    Virgule,

    Diviser,
    Multiplier,
    Moins,
    Plus,
    Egal,

    ToutEffacer,
    Signe,
    Pourcent,
}

/// Rôle d’un bouton pour la machine à états de l’écran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Chiffre,
    Virgule,
    OperateurBinaire,
    Egal,
    Effacer,
    Signe,
    Pourcent,
}

/// Famille visuelle (couleur du bouton), sans effet sur le calcul.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Chiffre,
    Operateur,
    Fonction,
}

/// Disposition du pavé, ligne par ligne.
pub const GRILLE: [&[Bouton]; 5] = [
    &[Bouton::ToutEffacer, Bouton::Signe, Bouton::Pourcent, Bouton::Diviser],
    &[Bouton::Sept, Bouton::Huit, Bouton::Neuf, Bouton::Multiplier],
    &[Bouton::Quatre, Bouton::Cinq, Bouton::Six, Bouton::Moins],
    &[Bouton::Un, Bouton::Deux, Bouton::Trois, Bouton::Plus],
    &[Bouton::Zero, Bouton::Virgule, Bouton::Egal],
];

/// Symboles des quatre opérateurs binaires, tels qu’ils apparaissent à l’écran.
pub const SYMBOLES_OPERATEURS: [char; 4] = ['+', '-', '×', '÷'];

impl Bouton {
    /// Texte contribué à l’écran (et affiché sur le bouton).
    pub fn libelle(self) -> &'static str {
        use Bouton::*;
        match self {
            Zero => "0",
            Un => "1",
            Deux => "2",
            Trois => "3",
            Quatre => "4",
            Cinq => "5",
            Six => "6",
            Sept => "7",
            Huit => "8",
            Neuf => "9",
            Virgule => ".",
            Diviser => "÷",
            Multiplier => "×",
            Moins => "-",
            Plus => "+",
            Egal => "=",
            ToutEffacer => "AC",
            Signe => "+/-",
            Pourcent => "%",
        }
    }

    pub fn role(self) -> Role {
        use Bouton::*;
        match self {
            Zero | Un | Deux | Trois | Quatre | Cinq | Six | Sept | Huit | Neuf => Role::Chiffre,
            Virgule => Role::Virgule,
            Diviser | Multiplier | Moins | Plus => Role::OperateurBinaire,
            Egal => Role::Egal,
            ToutEffacer => Role::Effacer,
            Signe => Role::Signe,
            Pourcent => Role::Pourcent,
        }
    }

    pub fn categorie(self) -> Categorie {
        match self.role() {
            Role::Chiffre | Role::Virgule => Categorie::Chiffre,
            Role::OperateurBinaire | Role::Egal => Categorie::Operateur,
            Role::Effacer | Role::Signe | Role::Pourcent => Categorie::Fonction,
        }
    }

    /// Bouton du chiffre `d` (0..=9).
    pub fn chiffre(d: u32) -> Option<Bouton> {
        use Bouton::*;
        let b = match d {
            0 => Zero,
            1 => Un,
            2 => Deux,
            3 => Trois,
            4 => Quatre,
            5 => Cinq,
            6 => Six,
            7 => Sept,
            8 => Huit,
            9 => Neuf,
            _ => return None,
        };
        Some(b)
    }

    /// Clavier physique -> bouton. `*`/`x` valent `×`, `/` vaut `÷`.
    pub fn depuis_touche(c: char) -> Option<Bouton> {
        if let Some(d) = c.to_digit(10) {
            return Bouton::chiffre(d);
        }
        let b = match c {
            '.' | ',' => Bouton::Virgule,
            '+' => Bouton::Plus,
            '-' => Bouton::Moins,
            '*' | 'x' | 'X' | '×' => Bouton::Multiplier,
            '/' | '÷' => Bouton::Diviser,
            '%' => Bouton::Pourcent,
            '=' => Bouton::Egal,
            _ => return None,
        };
        Some(b)
    }
}
