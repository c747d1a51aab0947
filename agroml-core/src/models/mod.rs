//! Domain models shared across the workspace.

pub mod category;
pub mod consensus;
pub mod feature_vector;
pub mod image_payload;
pub mod prediction_record;
pub mod responses;
pub mod role;
pub mod votes;

pub use category::Category;
pub use consensus::Consensus;
pub use feature_vector::FeatureVector;
pub use image_payload::ImagePayload;
pub use prediction_record::{PredictionOutput, PredictionRecord, PredictionStatus};
pub use responses::{CropRecommendation, DiseaseDetection};
pub use role::Role;
pub use votes::{ModelOutputs, ModelVote};
