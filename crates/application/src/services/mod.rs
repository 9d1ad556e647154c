pub mod quota_gate;

pub use quota_gate::QuotaGate;
