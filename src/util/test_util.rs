#![allow(non_snake_case)]
#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::formulas::Expression;

pub fn parse(input: &str) -> Expression {
    input.parse().unwrap_or_else(|e| panic!("{input}: {e}"))
}

pub fn hash<H>(element: H) -> u64
where H: Hash {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

#[allow(clippy::struct_field_names)]
pub struct F {
    // Constants
    pub(crate) TRUE: Expression,
    pub(crate) FALSE: Expression,

    // Literals
    pub(crate) A: Expression,
    pub(crate) B: Expression,
    pub(crate) C: Expression,
    pub(crate) D: Expression,
    pub(crate) X: Expression,
    pub(crate) Y: Expression,
    pub(crate) Z: Expression,
    pub(crate) NA: Expression,
    pub(crate) NB: Expression,
    pub(crate) NX: Expression,
    pub(crate) NY: Expression,

    // Disjunctions
    pub(crate) OR1: Expression,
    pub(crate) OR2: Expression,
    pub(crate) OR3: Expression,

    // Conjunctions
    pub(crate) AND1: Expression,
    pub(crate) AND2: Expression,
    pub(crate) AND3: Expression,

    // Negations
    pub(crate) NOT1: Expression,
    pub(crate) NOT2: Expression,

    // Implications
    pub(crate) IMP1: Expression,
    pub(crate) IMP2: Expression,
    pub(crate) IMP3: Expression,
    pub(crate) IMP4: Expression,

    // Equivalences
    pub(crate) EQ1: Expression,
    pub(crate) EQ2: Expression,
    pub(crate) EQ3: Expression,
    pub(crate) EQ4: Expression,

    // Predicates
    pub(crate) LE1: Expression,
}

impl F {
    pub(crate) fn new() -> Self {
        Self {
            TRUE: parse("$true"),
            FALSE: parse("$false"),
            A: parse("a"),
            B: parse("b"),
            C: parse("c"),
            D: parse("d"),
            X: parse("x"),
            Y: parse("y"),
            Z: parse("z"),
            NA: parse("~a"),
            NB: parse("~b"),
            NX: parse("~x"),
            NY: parse("~y"),
            OR1: parse("x | y"),
            OR2: parse("~x | ~y"),
            OR3: parse("(a & b) | (~a & ~b)"),
            AND1: parse("a & b"),
            AND2: parse("~a & ~b"),
            AND3: parse("(x | y) & (~x | ~y)"),
            NOT1: parse("~(a & b)"),
            NOT2: parse("~(x | y)"),
            IMP1: parse("a => b"),
            IMP2: parse("~a => ~b"),
            IMP3: parse("a & b => x | y"),
            IMP4: parse("(a <=> b) => (~x <=> ~y)"),
            EQ1: parse("a <=> b"),
            EQ2: parse("~a <=> ~b"),
            EQ3: parse("a & b <=> x | y"),
            EQ4: parse("a => b <=> ~a => ~b"),
            LE1: parse("x + 1 <= y"),
        }
    }
}
