// src/noyau/jetons.rs

use super::erreur::ErreurLexicale;
use super::tables::{constante, Fonction, Operateur, ANS};

/// Jeton lexical. L’ordre d’une suite de jetons est l’ordre source.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral numérique, gardé tel quel (converti par l’évaluateur).
    Num(String),
    Op(Operateur),
    LPar,
    RPar,
    /// Nom de fonction connu, en minuscules.
    Fonction(String),
    /// Séparateur d’arguments `,`.
    Virgule,
    /// Constante ou `ans`, en minuscules.
    Ident(String),
}

impl Tok {
    /// Un `+`/`-` qui suit ce jeton est unaire.
    fn ouvre_operande(&self) -> bool {
        matches!(self, Tok::Op(_) | Tok::LPar | Tok::Virgule)
    }
}

/// Tokenize une ligne en jetons.
/// Supporte:
/// - nombres 12, 3.5, .5, 1e-3, 2.5E+4
/// - opérateurs + - * / ^ (+/- unaires selon le jeton précédent)
/// - parenthèses ( ) et virgule
/// - fonctions (sin, max, ...), constantes (pi, e) et ans, insensibles à la casse
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLexicale> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre (plus long préfixe valide)
        if c.is_ascii_digit() || (c == '.' && chiffre_a(&chars, i + 1)) {
            let fin = fin_nombre(&chars, i);
            out.push(Tok::Num(chars[i..fin].iter().collect()));
            i = fin;
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            ',' => out.push(Tok::Virgule),
            '*' => out.push(Tok::Op(Operateur::Fois)),
            '/' => out.push(Tok::Op(Operateur::Divise)),
            '^' => out.push(Tok::Op(Operateur::Puissance)),
            '+' | '-' => {
                // unaire en tête, ou après opérateur / '(' / ','
                let unaire = out.last().map_or(true, Tok::ouvre_operande);
                let op = match (c, unaire) {
                    ('-', true) => Operateur::MoinsUnaire,
                    ('-', false) => Operateur::Moins,
                    (_, true) => Operateur::PlusUnaire,
                    (_, false) => Operateur::Plus,
                };
                out.push(Tok::Op(op));
            }
            _ if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let mot: String = chars[start..i].iter().collect();
                out.push(identifiant(mot)?);
                continue;
            }
            _ => return Err(ErreurLexicale::CaractereInvalide(c)),
        }
        i += 1;
    }

    Ok(out)
}

fn chiffre_a(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(char::is_ascii_digit)
}

/// Index juste après le nombre qui commence en `start`.
/// chiffres [ '.' chiffres ] [ (e|E) [+|-] chiffres ]
fn fin_nombre(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while chiffre_a(chars, i) {
        i += 1;
    }

    if chars.get(i) == Some(&'.') {
        i += 1;
        while chiffre_a(chars, i) {
            i += 1;
        }
    }

    // exposant seulement s’il est complet (sinon "2e" = 2 puis e)
    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        if chiffre_a(chars, j) {
            i = j;
            while chiffre_a(chars, i) {
                i += 1;
            }
        }
    }

    i
}

fn identifiant(mot: String) -> Result<Tok, ErreurLexicale> {
    let w = mot.to_lowercase();
    if Fonction::depuis_nom(&w).is_some() {
        Ok(Tok::Fonction(w))
    } else if w == ANS || constante(&w).is_some() {
        Ok(Tok::Ident(w))
    } else {
        Err(ErreurLexicale::IdentifiantInconnu(mot))
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(txt) => txt.as_str(),
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
            Tok::Fonction(nom) | Tok::Ident(nom) => nom.as_str(),
            Tok::Virgule => ",",
        };
        out.push(s);
    }
    out.join(" ")
}
