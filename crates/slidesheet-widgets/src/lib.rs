#![forbid(unsafe_code)]

//! Widgets for slidesheet.
//!
//! The only widget is [`sheet::SlideSheet`]; see the [`sheet`] module for the
//! transition controller and visibility reconciler it is built from.

pub mod sheet;
