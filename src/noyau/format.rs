// src/noyau/format.rs
//
// Affichage d’un f64 façon `%.{n}g` : n chiffres significatifs,
// notation fixe ou scientifique selon l’exposant, zéros finaux retirés.

use num_traits::Zero;

/// Formate `x` avec `chiffres` chiffres significatifs (au moins 1).
///
/// Exemples (15 chiffres) : 8 -> "8", 0.1+0.2 -> "0.3", 1e20 -> "1e+20".
pub fn formater_nombre(x: f64, chiffres: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x.is_zero() {
        return "0".to_string();
    }

    let p = chiffres.max(1);

    // exposant décimal APRÈS arrondi à p chiffres (9.99…9 peut passer à 10)
    let sci = format!("{:.*e}", p - 1, x);
    let Some((mantisse, exp_txt)) = sci.split_once('e') else {
        return sci.clone();
    };
    let exp: i32 = exp_txt.parse().unwrap_or(0);

    if exp < -4 || exp >= p as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        format!("{}e{signe}{:02}", sans_zeros_finaux(mantisse), exp.unsigned_abs())
    } else {
        let decimales = (p as i32 - 1 - exp).max(0) as usize;
        sans_zeros_finaux(&format!("{x:.decimales$}")).to_string()
    }
}

fn sans_zeros_finaux(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
