//! Core library for the weather widget.
//!
//! This crate defines:
//! - The lookup state machine and the input controller that feeds it
//! - Message derivation from a fetched snapshot
//! - Abstraction over the weather provider, plus a WeatherAPI.com client
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but any front-end can drive a [`WeatherWidget`]
//! and render its [`WidgetView`].

pub mod config;
pub mod error;
pub mod input;
pub mod lookup;
pub mod messages;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use error::{ErrorKind, FetchError, LookupError};
pub use input::{InputController, Submission};
pub use lookup::{InFlight, LookupMachine, LookupStatus};
pub use messages::{Clock, DerivedMessages, FixedClock, SystemClock};
pub use model::{LocationQuery, TemperatureUnit, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use widget::{WeatherWidget, WidgetView};
