//! ucca-core: UCCA refinement engine core library.
//!
//! Provides the domain model for STPA-style unsafe combinations of control
//! actions (UCCAs), the authority and interchangeability lookup indices,
//! and the abstract-pattern lexer/parser.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - Model types: [`AbstractUcca`], [`RefinedUcca`], [`UccaHierarchy`],
//!   [`AuthorityRelationship`], [`InterchangeableControllerGroup`],
//!   [`SpecialInteraction`], [`ControllerAssignment`], [`ActionRequirement`]
//! - [`AuthorityIndex`] / [`InterchangeabilityIndex`] -- lookup indices
//! - [`parse()`] -- pattern string to [`Pattern`] term list

pub mod index;
pub mod lexer;
pub mod model;
pub mod parser;

pub use index::{AuthorityIndex, GroupOverlap, InterchangeabilityIndex};
pub use model::{
    AbstractUcca, AbstractionLevel, ActionRequirement, AppliesTo, AuthorityRelationship,
    ControlAction, Controller, ControllerAssignment, InterchangeabilityType,
    InterchangeableControllerGroup, Priority, RefinedUcca, SpecialInteraction,
    SpecialInteractionKind, UccaHierarchy, UccaType,
};
pub use parser::{parse, Pattern, PatternTerm};
