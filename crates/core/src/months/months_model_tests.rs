//! Tests for month resolution.

#[cfg(test)]
mod tests {
    use crate::months::{MonthError, MonthOrdinal, MonthTable, ENGLISH_MONTH_NAMES};

    #[test]
    fn test_resolve_all_canonical_names() {
        let table = MonthTable::english();
        for (idx, name) in ENGLISH_MONTH_NAMES.iter().enumerate() {
            let month = table.resolve(name).unwrap();
            assert_eq!(month.ordinal(), idx as u32);
            assert_eq!(month.calendar_month(), idx as u32 + 1);
        }
    }

    #[test]
    fn test_resolve_ignores_case() {
        let table = MonthTable::english();
        assert_eq!(table.resolve("March").unwrap().ordinal(), 2);
        assert_eq!(table.resolve("MARCH").unwrap().ordinal(), 2);
        assert_eq!(table.resolve("mArCh").unwrap().ordinal(), 2);
        assert_eq!(table.resolve(" december ").unwrap().ordinal(), 11);
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        let table = MonthTable::english();
        for bad in ["smarch", "", "3", "03", "janurary", "jan", "Sept"] {
            assert_eq!(
                table.resolve(bad),
                Err(MonthError::Invalid(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_param_missing() {
        let table = MonthTable::english();
        assert_eq!(table.resolve_param(None), Err(MonthError::Missing));
        assert_eq!(table.resolve_param(Some("")), Err(MonthError::Missing));
        assert_eq!(table.resolve_param(Some("   ")), Err(MonthError::Missing));
    }

    #[test]
    fn test_resolve_param_present() {
        let table = MonthTable::english();
        assert_eq!(table.resolve_param(Some("July")).unwrap().ordinal(), 6);
        assert!(matches!(
            table.resolve_param(Some("Julember")),
            Err(MonthError::Invalid(_))
        ));
    }

    #[test]
    fn test_custom_table() {
        let table = MonthTable::new([
            ("Enero", MonthOrdinal::new(0).unwrap()),
            ("Febrero", MonthOrdinal::new(1).unwrap()),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("ENERO").unwrap().ordinal(), 0);
        assert!(table.resolve("January").is_err());
    }

    #[test]
    fn test_month_ordinal_bounds() {
        assert!(MonthOrdinal::new(11).is_some());
        assert!(MonthOrdinal::new(12).is_none());
        assert_eq!(MonthOrdinal::from_calendar_month(1).unwrap().ordinal(), 0);
        assert!(MonthOrdinal::from_calendar_month(0).is_none());
        assert!(MonthOrdinal::from_calendar_month(13).is_none());
        assert_eq!(MonthOrdinal::new(2).unwrap().to_string(), "march");
    }
}
