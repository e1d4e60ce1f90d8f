//! Outbound adapters implementing domain ports against infrastructure.
//!
//! Persistence lives under [`persistence`]; any future outbound integration
//! (asset storage, mail, etc.) is expected to sit alongside it.

pub mod persistence;
