//! Retrieval engine for a farmer-helpline assistant.
//!
//! Matches free-text agricultural queries against a historical corpus of
//! Kisan Call Centre question/answer records: TF-IDF cosine similarity
//! first, an approximate-substring fallback when that is inconclusive, a
//! vague-answer filter, and a best-effort Telugu rendering of the final
//! answer. The conversational front end, transcript storage and weather
//! lookups live outside this crate and talk to it through [`engine`],
//! [`matcher::QueryInput`] and [`geo`].

pub mod answer;
pub mod corpus;
pub mod engine;
pub mod geo;
pub mod matcher;
pub mod state;
pub mod translate;
