use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Abréviations françaises des mois, tronquées à trois caractères.
/// Juin et juillet partagent « Jui », comme dans l'affichage historique.
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Formate une date ISO (AAAA-MM-JJ) en forme courte française
///
/// # Arguments
/// * `raw` - la date telle que stockée, ex. « 2004-04-04 »
///
/// # Retour
/// La forme courte, ex. « 4 Avr. 04 », ou une erreur de format si la valeur
/// ne désigne pas une date calendaire valide
pub fn format_date(raw: &str) -> AppResult<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::format(format!("date illisible « {raw} »: {e}")))?;

    let month = SHORT_MONTHS[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year() % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_short_french_form() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mar. 03");
    }

    #[test]
    fn test_format_date_no_leading_zero_on_day() {
        // Le jour perd son zéro initial, l'année le garde
        assert_eq!(format_date("2005-12-09").unwrap(), "9 Déc. 05");
        assert_eq!(format_date("1999-08-31").unwrap(), "31 Aoû. 99");
    }

    #[test]
    fn test_format_date_june_july_share_abbreviation() {
        assert_eq!(format_date("2020-06-15").unwrap(), "15 Jui. 20");
        assert_eq!(format_date("2020-07-15").unwrap(), "15 Jui. 20");
    }

    #[test]
    fn test_format_date_rejects_invalid_values() {
        assert!(matches!(format_date(""), Err(AppError::Format(_))));
        assert!(matches!(format_date("demain"), Err(AppError::Format(_))));
        assert!(matches!(
            format_date("2004-13-01"),
            Err(AppError::Format(_))
        ));
        // jour inexistant
        assert!(matches!(
            format_date("2021-02-30"),
            Err(AppError::Format(_))
        ));
    }
}
