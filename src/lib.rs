#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal brochure for the RelivaWell physiotherapy clinic.
//!
//! A single-binary TUI that renders the clinic's public pages — hero, doctor
//! bio, services, testimonials, patient resources, and a contact/appointment
//! form — as navigable sections. Nothing is persisted and nothing leaves the
//! machine: a valid form submission composes the request payload locally,
//! shows a confirmation for a few seconds, then resets.

pub mod content;
pub mod form;
pub mod tui;
