use fastrand::Rng;

use crate::formulas::{Comparison, Expression};

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed, which makes the results deterministic
/// - the boolean variables and the integer variables to use; all variables
///   of a kind are chosen with the same probability
/// - weights for the different node kinds, defining how often a kind is
///   generated compared to the others
/// - the maximum numbers of operands for conjunctions and disjunctions
///
/// Inner nodes are only generated above the maximal depth, the leaves are
/// always atoms. So the effective share of atoms is higher than their
/// weights suggest.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) int_variables: Vec<String>,
    pub(crate) weight_constant: f32,
    pub(crate) weight_variable: f32,
    pub(crate) weight_negative_literal: f32,
    pub(crate) weight_predicate: f32,
    pub(crate) weight_or: f32,
    pub(crate) weight_and: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_impl: f32,
    pub(crate) weight_equiv: f32,
    pub(crate) maximum_operands_and: u32,
    pub(crate) maximum_operands_or: u32,
    pub(crate) maximum_constant: i64,
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given boolean variables and
    /// with default settings. Predicates are disabled.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use clausal::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![String::from("A"), String::from("B")];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub fn default_with_variables(variables: Vec<String>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            int_variables: vec![String::from("n")],
            weight_constant: 0.1,
            weight_variable: 1.0,
            weight_negative_literal: 1.0,
            weight_predicate: 0.0,
            weight_or: 30.0,
            weight_and: 30.0,
            weight_not: 1.0,
            weight_impl: 1.0,
            weight_equiv: 1.0,
            maximum_operands_and: 5,
            maximum_operands_or: 5,
            maximum_constant: 5,
        }
    }

    /// Builds a basic configuration with default settings and `num_vars`
    /// generated boolean variables `v0`, `v1`, ...
    ///
    /// ```
    /// # use clausal::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(2);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        let width = num_vars.saturating_sub(1).to_string().len();
        Self::default_with_variables((0..num_vars).map(|n| format!("v{n:0width$}")).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the integer variables used in predicates. Must not be
    /// empty if predicates have a positive weight.
    #[must_use]
    pub fn int_variables(mut self, int_variables: Vec<String>) -> Self {
        self.int_variables = int_variables;
        self
    }

    /// Sets the relative weight of a constant.
    #[must_use]
    pub const fn weight_constant(mut self, weight_constant: f32) -> Self {
        self.weight_constant = weight_constant;
        self
    }

    /// Sets the relative weight of a variable/positive literal.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negative literal.
    #[must_use]
    pub const fn weight_negative_literal(mut self, weight_negative_literal: f32) -> Self {
        self.weight_negative_literal = weight_negative_literal;
        self
    }

    /// Sets the relative weight of a predicate over the integer variables.
    ///
    /// ```
    /// # use clausal::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(4)
    ///         .int_variables(vec![String::from("x"), String::from("y")])
    ///         .weight_predicate(2.0);
    /// ```
    #[must_use]
    pub const fn weight_predicate(mut self, weight_predicate: f32) -> Self {
        self.weight_predicate = weight_predicate;
        self
    }

    /// Sets the relative weight of a disjunction.
    #[must_use]
    pub const fn weight_or(mut self, weight_or: f32) -> Self {
        self.weight_or = weight_or;
        self
    }

    /// Sets the relative weight of a conjunction.
    #[must_use]
    pub const fn weight_and(mut self, weight_and: f32) -> Self {
        self.weight_and = weight_and;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of an implication.
    #[must_use]
    pub const fn weight_impl(mut self, weight_impl: f32) -> Self {
        self.weight_impl = weight_impl;
        self
    }

    /// Sets the relative weight of an equivalence.
    #[must_use]
    pub const fn weight_equiv(mut self, weight_equiv: f32) -> Self {
        self.weight_equiv = weight_equiv;
        self
    }

    /// Sets the maximum number of operands in a conjunction. Values below
    /// 3 yield conjunctions with exactly two operands.
    #[must_use]
    pub const fn maximum_operands_and(mut self, maximum_operands_and: u32) -> Self {
        self.maximum_operands_and = maximum_operands_and;
        self
    }

    /// Sets the maximum number of operands in a disjunction. Values below
    /// 3 yield disjunctions with exactly two operands.
    #[must_use]
    pub const fn maximum_operands_or(mut self, maximum_operands_or: u32) -> Self {
        self.maximum_operands_or = maximum_operands_or;
        self
    }

    /// Sets the largest absolute value of integer constants in predicates.
    #[must_use]
    pub const fn maximum_constant(mut self, maximum_constant: i64) -> Self {
        self.maximum_constant = maximum_constant;
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_constant
            + self.weight_variable
            + self.weight_negative_literal
            + self.weight_predicate
            + self.weight_or
            + self.weight_and
            + self.weight_not
            + self.weight_impl
            + self.weight_equiv;
        let constant = self.weight_constant / total;
        let literal = constant + (self.weight_variable + self.weight_negative_literal) / total;
        let predicate = literal + self.weight_predicate / total;
        let or = predicate + self.weight_or / total;
        let and = or + self.weight_and / total;
        let not = and + self.weight_not / total;
        let implication = not + self.weight_impl / total;
        let phase = self.weight_variable / (self.weight_variable + self.weight_negative_literal);
        FormulaTypeProbabilities { constant, literal, predicate, or, and, not, implication, phase }
    }
}

struct FormulaTypeProbabilities {
    constant: f32,
    literal: f32,
    predicate: f32,
    or: f32,
    and: f32,
    not: f32,
    implication: f32,
    phase: f32,
}

const COMPARISONS: [Comparison; 6] = [
    Comparison::Equal,
    Comparison::NotEqual,
    Comparison::LessThan,
    Comparison::LessEqual,
    Comparison::GreaterThan,
    Comparison::GreaterEqual,
];

/// A generator for random formulas.
///
/// The formula types included in the generated formulas can be configured with
/// a [`FormulaRandomizerConfig`]. Equal configurations generate equal
/// sequences of formulas.
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use clausal::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_num_vars(5);
    /// let mut randomizer = FormulaRandomizer::new(config);
    /// let formula = randomizer.formula(3);
    /// assert!(formula.depth() <= 4);
    /// ```
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        let seed = config.seed;
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random: Rng::with_seed(seed), formula_probs }
    }

    /// Returns a random constant.
    pub fn constant(&mut self) -> Expression {
        Expression::constant(self.random.bool())
    }

    /// Returns a random name of a boolean variable.
    pub fn var_string(&mut self) -> &str {
        &self.config.variables[self.random.usize(0..self.config.variables.len())]
    }

    /// Returns a random positive literal.
    pub fn variable(&mut self) -> Expression {
        Expression::variable(self.var_string())
    }

    /// Returns a random literal.
    ///
    /// The probability of whether it is positive or negative depends on the
    /// configuration.
    pub fn literal(&mut self) -> Expression {
        let phase = self.random.f32() < self.formula_probs.phase;
        Expression::literal(self.var_string(), phase)
    }

    /// Returns a random predicate `c * x + d <op> e` over one of the integer
    /// variables.
    pub fn predicate(&mut self) -> Expression {
        let name = &self.config.int_variables[self.random.usize(0..self.config.int_variables.len())];
        let variable = Expression::int_variable(name.as_str());
        let comparison = COMPARISONS[self.random.usize(0..COMPARISONS.len())];
        let coefficient = Expression::int(self.int_constant());
        let product = Expression::multiply([coefficient, variable]).expect("two terms form a product");
        let sum = Expression::add([product, Expression::int(self.int_constant())]).expect("two terms form a sum");
        Expression::predicate(comparison, sum, Expression::int(self.int_constant())).expect("two terms form a predicate")
    }

    fn int_constant(&mut self) -> i64 {
        let bound = self.config.maximum_constant.abs();
        self.random.i64(-bound..=bound)
    }

    /// Returns a random atom: a constant, a literal or a predicate.
    pub fn atom(&mut self) -> Expression {
        let n = self.random.f32() * self.formula_probs.predicate;
        if n < self.formula_probs.constant {
            self.constant()
        } else if n < self.formula_probs.literal {
            self.literal()
        } else {
            self.predicate()
        }
    }

    /// Returns a random negation with a given maximal depth.
    pub fn not(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let operand = self.formula(max_depth - 1);
            Expression::not(operand).expect("a negation of a formula")
        }
    }

    /// Returns a random implication with a given maximal depth.
    pub fn implication(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Expression::implies(left, right).expect("an implication of formulas")
        }
    }

    /// Returns a random equivalence with a given maximal depth.
    pub fn equivalence(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Expression::bi_implies(left, right).expect("an equivalence of formulas")
        }
    }

    /// Returns a random conjunction with a given maximal depth.
    ///
    /// ```
    /// # use clausal::formulas::ExpressionKind;
    /// # use clausal::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let conjunction = randomizer.and(2);
    /// assert_eq!(conjunction.kind(), &ExpressionKind::And);
    /// ```
    pub fn and(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let operands = self.operands(self.config.maximum_operands_and, max_depth - 1);
            Expression::and(operands).expect("a conjunction of formulas")
        }
    }

    /// Returns a random disjunction with a given maximal depth.
    pub fn or(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let operands = self.operands(self.config.maximum_operands_or, max_depth - 1);
            Expression::or(operands).expect("a disjunction of formulas")
        }
    }

    fn operands(&mut self, maximum: u32, max_depth: u32) -> Vec<Expression> {
        let num_operands = self.random.u32(2..maximum.max(3));
        (0..num_operands).map(|_| self.formula(max_depth)).collect()
    }

    /// Returns a random formula with a given maximal depth.
    pub fn formula(&mut self, max_depth: u32) -> Expression {
        if max_depth == 0 {
            self.atom()
        } else {
            let n = self.random.f32();
            if n < self.formula_probs.constant {
                self.constant()
            } else if n < self.formula_probs.literal {
                self.literal()
            } else if n < self.formula_probs.predicate {
                self.predicate()
            } else if n < self.formula_probs.or {
                self.or(max_depth)
            } else if n < self.formula_probs.and {
                self.and(max_depth)
            } else if n < self.formula_probs.not {
                self.not(max_depth)
            } else if n < self.formula_probs.implication {
                self.implication(max_depth)
            } else {
                self.equivalence(max_depth)
            }
        }
    }

    /// Returns a list of `num_constraints` random formulas with a given
    /// maximal depth.
    pub fn constraint_set(&mut self, num_constraints: u32, max_depth: u32) -> Vec<Expression> {
        (0..num_constraints).map(|_| self.formula(max_depth)).collect()
    }
}
