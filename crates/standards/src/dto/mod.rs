mod qualification;

pub use qualification::QualificationCheckRequest;
