//! Shared UI components reusable across slides
//!
//! Contains:
//! - `palette` - Deck colours and accent mapping
//! - `blocks` - Badge, stat card, formula block and panel styles
//! - `divider` - Short accent rule under slide headings

pub mod blocks;
pub mod divider;
pub mod palette;
