mod equality_tests {
    use crate::formulas::Expression;
    use crate::util::test_util::{hash, parse, F};

    #[test]
    fn test_structural_equality() {
        let ff = F::new();
        assert_eq!(parse("a & b"), ff.AND1);
        assert_eq!(Expression::and([ff.A.clone(), ff.B.clone()]).unwrap(), ff.AND1);
        assert_ne!(parse("b & a"), ff.AND1);
        assert_ne!(parse("a & b & b"), ff.AND1);
        assert_ne!(ff.A, ff.NA);
        assert_ne!(parse("x + 1 < y"), ff.LE1);
        assert_ne!(parse("x + 1 <= z"), ff.LE1);
        assert_ne!(Expression::variable("x"), Expression::int_variable("x"));
        assert_ne!(Expression::and([] as [Expression; 0]).unwrap(), Expression::or([] as [Expression; 0]).unwrap());
    }

    #[test]
    fn test_double_negations_are_kept() {
        assert_ne!(parse("~~a"), parse("a"));
        assert_eq!(parse("~~a"), Expression::not(parse("~a")).unwrap());
    }

    #[test]
    fn test_hash() {
        let ff = F::new();
        assert_eq!(hash(&parse("a => b <=> ~a => ~b")), hash(&ff.EQ4));
        assert_eq!(hash(&ff.OR3.clone()), hash(&ff.OR3));
        assert_ne!(hash(&ff.AND1), hash(&ff.OR1));
        assert_ne!(hash(&parse("(a & b) & c")), hash(&parse("a & (b & c)")));
    }

    #[test]
    fn test_clone() {
        let ff = F::new();
        for formula in [&ff.TRUE, &ff.NX, &ff.AND3, &ff.IMP4, &ff.EQ3, &ff.LE1] {
            assert_eq!(&formula.clone(), formula);
        }
    }
}
