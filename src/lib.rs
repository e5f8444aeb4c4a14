//! Rsbeatsource is a wrapper for the Beatsource API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsbeatsource = "0.1.0"
//! ```
//!
//! By default, Rsbeatsource uses asynchronous programming with `async` and `await`.
//!
//! ## Getting Started
//!
//! ## Authorization
//!
//! Since all catalog methods require user authentication, you create a
//! session from a Beatsource username and password. The account needs an
//! active Link subscription; the lossless and 256k tiers additionally need
//! Link Professional.
//!
//! ## Quality selection
//!
//! The `download_quality` setting string resolves to a fixed codec tier
//! through [`quality::resolve_quality`], and requested cover sizes are
//! bounded to the supported 100-1400px range through
//! [`quality::resolve_cover_resolution`].
//!
//! ### Examples
//!
//! ```no_run
//! use rsbeatsource::auth::BeatsourceCredentials;
//! use rsbeatsource::client::Beatsource;
//! use rsbeatsource::quality::{resolve_quality, QualityPreference};
//! use dotenv::dotenv;
//! use std::env;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     let username = env::var("BEATSOURCE_USERNAME").unwrap();
//!     let password = env::var("BEATSOURCE_PASSWORD").unwrap();
//!
//!     // Create a session using your user credentials.
//!     let credentials = BeatsourceCredentials::new(&username, &password)
//!         .create_session()
//!         .await
//!         .unwrap();
//!
//!     // Use the credentials to start the client
//!     let client = Beatsource::new(credentials);
//!     let track = client.tracks().get("11575544").await;
//!     println!("{:?}", track.unwrap());
//!
//!     // Resolve the configured quality and request the download
//!     let tier = resolve_quality(QualityPreference::Lossless);
//!     let download = client.tracks().download("11575544", tier).await;
//!     println!("{:?}", download.unwrap());
//! }
//! ```

pub mod auth;
pub mod client;
pub mod covers;
pub mod endpoints;
pub mod link;
pub mod model;
pub mod quality;
pub mod settings;
