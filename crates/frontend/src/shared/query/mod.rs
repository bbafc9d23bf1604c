//! Cached entity fetching and mutation dispatch shared by every dashboard module.

pub mod cache;
pub mod client;
pub mod hooks;
pub mod key;
pub mod mutation;
pub mod normalize;
pub mod transport;

pub use client::QueryClient;
pub use hooks::{
    provide_query_client, use_entity, use_entity_list, use_mutation, use_paged_list,
    use_query_client, EntityList, FetchOptions, MutationHandle, MutationMessages,
};
pub use key::QueryKey;
pub use mutation::{MutationOperation, MutationRequest};
