//! Hookwire Domain Library
//!
//! Core types and interfaces for turning repository events into
//! integration-specific webhook payloads.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Event payloads and webhook records
//!   - `entities/`: Event payloads (Push, Issue, PullRequest, ...) and the Webhook record
//!   - `value_objects/`: Event and hook type tags, action verbs
//!   - `errors/`: Conversion and delivery error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `convertor`: One conversion method per event kind plus the routing table
//!   - `payloader`: Indented JSON serialization of payloads
//!   - `diagnostics`: Sink for lenient-path decode failures
//!   - `delivery`: Outbound delivery interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookwire::{convert_payloader, EventPayload, HookEventType, PayloadConvertor};
//!
//! let outcome = convert_payloader(&convertor, &payload, HookEventType::Push)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ChangesFromPayload, ChangesPayload, Comment, ConvertError, ConvertorMethod, CreatePayload,
    DeletePayload, DeliveryError, EventPayload, ForkPayload, HookEventType, HookIssueAction,
    HookIssueCommentAction, HookReleaseAction, HookRepoAction, HookType, Issue,
    IssueCommentPayload, IssuePayload, Label, PayloadCommit, PayloadUser, PrBranchInfo,
    PullRequest, PullRequestPayload, PushPayload, Release, ReleasePayload, Repository,
    RepositoryPayload, ReviewPayload, User, Webhook,
};
pub use ports::{
    convert_payloader, Conversion, ConvertResult, DeliveryConfig, DiagnosticSink, HookDeliverer,
    HookRequest, HookResponse, PayloadConvertor, Payloader, TracingDiagnostics,
};
