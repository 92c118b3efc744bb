//! Text distillation: answer-line canonicalization and clue tokenization.

mod normalize;
pub mod stopwords;

pub use normalize::{
    DistillOptions, MAX_SIMPLE_ANSWER_LEN, clue_bag, distill, simplify_answer,
    unique_simple_answers,
};
