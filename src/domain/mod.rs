//! Domain Layer
//!
//! The lending rules of the library - pure business logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Users, works, creators, requests, notifications
//! - `value_objects/` - Ids, behavior tiers, status, categories
//! - `services/` - Rule chain, behavior state machine, fines, inventory,
//!   interest dispatch, search
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **No logging** - Messaging is the caller's job
//! 3. **Ids, not pointers** - Entities refer to each other by id only

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
