mod evaluation_tests {
    use crate::datastructures::{Problem, ValueAssignment, ValueRepresentation};
    use crate::formulas::{Expression, Value, ValueType};
    use crate::util::test_util::{parse, F};

    fn ass() -> ValueAssignment {
        ValueAssignment::from_pairs([
            ("a", Value::Bool(true)),
            ("b", Value::Bool(false)),
            ("c", Value::Bool(true)),
            ("x", Value::Bool(true)),
            ("y", Value::Bool(false)),
        ])
        .unwrap()
    }

    #[test]
    fn test_constant_eval() {
        let ff = F::new();
        assert!(ff.TRUE.holds(&ass()).unwrap());
        assert!(!ff.FALSE.holds(&ass()).unwrap());
        assert!(ff.TRUE.holds(&ValueAssignment::default()).unwrap());
    }

    #[test]
    fn test_literal_eval() {
        let ff = F::new();
        assert!(ff.A.holds(&ass()).unwrap());
        assert!(!ff.NA.holds(&ass()).unwrap());
        assert!(ff.X.holds(&ass()).unwrap());
        assert!(!ff.NX.holds(&ass()).unwrap());
    }

    #[test]
    fn test_not_eval() {
        let ff = F::new();
        assert!(ff.NOT1.holds(&ass()).unwrap());
        assert!(!ff.NOT2.holds(&ass()).unwrap());
    }

    #[test]
    fn test_binary_eval() {
        let ff = F::new();
        assert!(!ff.IMP1.holds(&ass()).unwrap());
        assert!(ff.IMP2.holds(&ass()).unwrap());
        assert!(ff.IMP3.holds(&ass()).unwrap());
        assert!(ff.IMP4.holds(&ass()).unwrap());
        assert!(!ff.EQ1.holds(&ass()).unwrap());
        assert!(!ff.EQ2.holds(&ass()).unwrap());
        assert!(!ff.EQ3.holds(&ass()).unwrap());
        assert!(!ff.EQ4.holds(&ass()).unwrap());
    }

    #[test]
    fn test_nary_eval() {
        let ff = F::new();
        assert!(ff.OR1.holds(&ass()).unwrap());
        assert!(ff.OR2.holds(&ass()).unwrap());
        assert!(!ff.OR3.holds(&ass()).unwrap());
        assert!(!ff.AND1.holds(&ass()).unwrap());
        assert!(!ff.AND2.holds(&ass()).unwrap());
        assert!(ff.AND3.holds(&ass()).unwrap());
        assert!(Expression::and([] as [Expression; 0]).unwrap().holds(&ass()).unwrap());
        assert!(!Expression::or([] as [Expression; 0]).unwrap().holds(&ass()).unwrap());
    }

    #[test]
    fn test_predicate_eval() {
        let ff = F::new();
        let ints = |x, y| ValueAssignment::from_pairs([("x", Value::Int(x)), ("y", Value::Int(y))]).unwrap();
        assert!(ff.LE1.holds(&ints(2, 3)).unwrap());
        assert!(!ff.LE1.holds(&ints(3, 3)).unwrap());
        assert_eq!(ff.LE1.children()[0].evaluate(&ints(-5, 0)).unwrap(), Value::Int(-4));
        assert!(parse("2 * x * y = x + x + y + 4").holds(&ints(3, 2)).unwrap());
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert!(parse("9223372036854775807 + 1 < 0").holds(&ValueAssignment::default()).unwrap());
        assert!(parse("-9223372036854775808 * -1 = -9223372036854775808").holds(&ValueAssignment::default()).unwrap());
    }

    #[test]
    fn test_missing_and_mistyped_variables() {
        let ff = F::new();
        let only_a = ValueAssignment::from_pairs([("a", Value::Bool(true))]).unwrap();
        let problems = parse("a & b & (c | ~b)").evaluate(&only_a).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::UnassignedVariable { name: "b".into() },
            Problem::UnassignedVariable { name: "c".into() },
        ]);
        let problems = ff.LE1.evaluate(&ass()).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::MistypedVariable { name: "x".into(), expected: ValueType::Int, actual: ValueType::Bool },
            Problem::MistypedVariable { name: "y".into(), expected: ValueType::Int, actual: ValueType::Bool },
        ]);
    }

    #[test]
    fn test_terms_do_not_hold() {
        let term = Expression::add([Expression::int(1), Expression::int(2)]).unwrap();
        assert_eq!(term.evaluate(&ValueAssignment::default()).unwrap(), Value::Int(3));
        let problems = term.holds(&ValueAssignment::default()).unwrap_err();
        assert_eq!(problems.as_slice(), &[Problem::Unevaluable { operator: "Add" }]);
    }

    #[test]
    fn test_additional_variables_are_ignored() {
        let mut assignment = ass();
        assignment.insert("unused", Value::Int(7));
        assert!(F::new().AND3.holds(&assignment).unwrap());
    }
}
