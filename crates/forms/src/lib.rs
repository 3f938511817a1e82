//! Form submission pipeline: schema validation, controller state, remote
//! action seam and result dispatch.
//!
//! The flow for one attempt: user input lands in a [`FormController`], the
//! controller validates against a [`ValidationSchema`] on submit, a remote
//! action ([`AuthApi`]) turns the validated values into a
//! [`SubmissionResult`], and a [`Dispatcher`] maps that result back onto
//! field errors, a global feedback message, navigation or a notification.
//! Client-side failures never reach the network; remote failures always end
//! as controller state, never as an unhandled error.

pub mod controller;
pub mod dispatch;
pub mod domain;
pub mod remote;
pub mod schema;

pub use controller::{FormController, SubmitOutcome};
pub use dispatch::{submit_and_dispatch, Dispatcher, NavMode, Navigator, Notice, Notifier};
pub use domain::{FieldError, FormValues, SubmissionResult, SubmissionState};
pub use remote::AuthApi;
pub use schema::{login_schema, register_schema, ValidationSchema};
