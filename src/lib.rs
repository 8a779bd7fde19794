#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `playbreak-rs` plays scripted sprite cutscenes ("break lists") against a
//! host engine's sprite, sound and trigger services.
//!
//! A break list is a sequence of frame ranges of one sprite series. Each
//! range can start a sound, raise a trigger, and be gated on a game
//! variable. See [`playbreak_types`] for the data model and
//! [`playbreak_player`] for the playback pool.
//!
pub use playbreak_internal::*;
