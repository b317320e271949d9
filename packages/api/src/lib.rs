//! # API crate: client side of the GhostTrack lookup service
//!
//! Everything the dashboard needs to talk to the remote API, independent of
//! how it is rendered. Compiles for native targets and `wasm32`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoint`] | Resolves the API base URL from the page location (docker / local dev / same origin) |
//! | [`http`] | `HttpClient` seam and its `reqwest` implementation |
//! | [`models`] | Request bodies, lenient response wrappers and their display projections |
//! | [`query`] | Per-view state machine (`Idle → Pending → Loaded / Failed`) with stale-response fencing |
//! | [`client`] | `ApiClient`: one method per API operation, plus the submit flows the views run |
//! | [`error`] | `ApiError` and the user-facing message rules |
//!
//! ## Operations
//!
//! | Operation | Request |
//! |-----------|---------|
//! | Track IP | `POST /api/track-ip` `{ ip_address }` |
//! | Track phone | `POST /api/track-phone` `{ phone_number }` |
//! | Track username | `POST /api/track-username` `{ username }` |
//! | My IP | `GET /api/my-ip`, chained into Track IP |
//! | Health | `GET /` |

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod query;

pub use client::{ApiClient, MyIpView};
pub use endpoint::{resolve, ApiEndpoints, DeploymentMode, EndpointConfig, PageLocation};
pub use error::{ApiError, Result};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use models::{Field, Health, IpLookup, MyIp, PhoneLookup, ProfileMatch, UsernameLookup};
pub use query::{QueryKind, QueryState, QueryView, Ticket, ViewCell};
