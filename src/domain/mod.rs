//! Domain Layer
//!
//! Validation and path rules without direct I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated values (DirectiveType, LayerType, TypePattern, PathResult)
//! - `entities/` - The TwoParams aggregate
//! - `services/` - TypeFactory and the four path resolvers
//! - `ports/` - Pattern provider and file system interfaces
//!
//! File existence checks go through the `FileSystem` port so resolvers can
//! be tested against an in-memory tree.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
