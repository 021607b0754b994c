#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # festapp-entities
//!
//! Reusable, agnostic domain entities of a festapp event.
//!
//! Every entity mirrors one row of the relational store. Rows are
//! identified by integer surrogate keys ([`id::RowId`]); references
//! between rows are plain integer columns where [`id::UNSET_ID`]
//! stands for "no reference".

pub mod directory;
pub mod event;
pub mod family;
pub mod guest;
pub mod hunt;
pub mod id;
pub mod install;
pub mod lookup;
pub mod news;
pub mod pindrop;
pub mod poll;
pub mod project;
pub mod schedule;
pub mod shop;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
