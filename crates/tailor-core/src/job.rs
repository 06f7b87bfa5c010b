use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tailor_canonical::Digest;
use uuid::Uuid;

use crate::errors::CoreError;

/// Lifecycle status of a compile job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepted, waiting for a worker. Initial state.
    Queued,
    /// Picked up by the dispatch collaborator.
    Processing,
    /// Finished successfully. Terminal.
    Done,
    /// Finished with an error. Terminal; requires a populated `error`.
    Failed,
}

impl JobStatus {
    /// True for states with no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }

    /// Whether the state machine permits moving to `next`.
    ///
    /// `queued → processing → done | failed`; nothing leaves a terminal
    /// state. The transitions themselves are performed by the external
    /// dispatch collaborator; this only defines what it must respect.
    pub fn can_transition_to(self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Queued, JobStatus::Processing)
                | (JobStatus::Processing, JobStatus::Done)
                | (JobStatus::Processing, JobStatus::Failed)
        )
    }
}

/// Closed set of artifact kinds a finished job may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Rendered résumé PDF.
    Pdf,
    /// ATS alignment report (JSON).
    AtsReportJson,
    /// Markdown diff against the input résumé.
    DiffMd,
}

/// A produced output file, by kind and path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact kind (closed set).
    pub kind: ArtifactKind,
    /// Local path or object key.
    pub path: String,
}

/// Terminal failure details; present only when status is `failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobError {
    /// Human-readable failure message.
    pub message: String,
    /// Optional stable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// The tracked record of a compile job's lifecycle and outputs.
///
/// Created here in its initial state, then owned and mutated exclusively by
/// the external dispatch collaborator. This crate never re-validates or
/// re-derives a descriptor once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    /// Opaque unique identifier; generated fresh per accepted request.
    pub job_id: Uuid,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
    /// Last mutation time (UTC); never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    /// Content digest of the validated request. Dedup metadata only.
    pub input_hash: Digest,
    /// Produced artifacts; empty until a later stage populates them.
    pub artifacts: Vec<Artifact>,
    /// Failure details; present iff status is `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JobError>,
}

impl JobDescriptor {
    /// Checks the shape invariants every collaborator must preserve.
    pub fn verify(&self) -> Result<(), CoreError> {
        if self.updated_at < self.created_at {
            return Err(CoreError::InvalidDescriptor(format!(
                "updatedAt {} precedes createdAt {}",
                self.updated_at, self.created_at
            )));
        }
        match (self.status, self.error.is_some()) {
            (JobStatus::Failed, false) => Err(CoreError::InvalidDescriptor(
                "failed status requires a populated error".to_string(),
            )),
            (JobStatus::Failed, true) => Ok(()),
            (status, true) => Err(CoreError::InvalidDescriptor(format!(
                "error must be absent in status {:?}",
                status
            ))),
            (_, false) => Ok(()),
        }
    }
}

/// Constructs the initial descriptor for an accepted request.
///
/// Fresh v4 `jobId` per call with no shared counter or registry, so
/// concurrent creations never contend. Status starts at `queued` with
/// `createdAt == updatedAt`, no artifacts, no error.
pub fn create_job(input_hash: Digest) -> JobDescriptor {
    let now = Utc::now();
    JobDescriptor {
        job_id: Uuid::new_v4(),
        status: JobStatus::Queued,
        created_at: now,
        updated_at: now,
        input_hash,
        artifacts: Vec::new(),
        error: None,
    }
}
