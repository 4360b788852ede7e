use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::profile::{
        MessageResponse, Profile, ProfileCreatedResponse, ProfileUpdate, StoredProfile,
    },
    errors::AppError,
    infrastructure::render::{html::render_cv_page, pdf::{render_cv_pdf, PdfDownload}},
    repositories::profile::ProfileRepository,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    /// Validates and stores a new profile, returning its generated id.
    /// Invalid payloads never reach the repository.
    pub async fn create_profile(
        &self,
        request: Profile,
    ) -> Result<ProfileCreatedResponse, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert()?;
        let id = self.profile_repo.create_profile(&insert).await?;

        tracing::info!("Profile created with id {}", id);

        Ok(ProfileCreatedResponse {
            id,
            message: "Profile created successfully".to_string(),
        })
    }

    /// Fetches one profile by id.
    pub async fn get_profile(&self, id: Uuid) -> Result<StoredProfile, AppError> {
        self.profile_repo
            .get_profile(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {}", id)))
    }

    /// Returns every stored profile; an empty store yields an empty list.
    pub async fn list_profiles(&self) -> Result<Vec<StoredProfile>, AppError> {
        self.profile_repo.list_profiles().await
    }

    /// Applies a sparse patch to an existing profile. Only the supplied
    /// fields change; an all-empty patch is rejected before any write.
    pub async fn update_profile(
        &self,
        id: Uuid,
        request: ProfileUpdate,
    ) -> Result<MessageResponse, AppError> {
        request.validate()?;

        if request.is_empty() {
            return Err(AppError::InvalidInput("No fields to update".to_string()));
        }

        let patch = request.to_patch_document()?;

        let matched = self.profile_repo.update_profile(id, &patch).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Profile {}", id)));
        }

        Ok(MessageResponse {
            message: "Profile updated successfully".to_string(),
        })
    }

    /// Deletes a profile. Deleting an unknown id reports not-found, so a
    /// repeated delete is a no-op rather than a failure.
    pub async fn delete_profile(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        let matched = self.profile_repo.delete_profile(id).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Profile {}", id)));
        }

        Ok(MessageResponse {
            message: "Profile deleted successfully".to_string(),
        })
    }

    /// Renders the stored profile as a full HTML page.
    pub async fn view_profile(&self, id: Uuid) -> Result<String, AppError> {
        let stored = self.get_profile(id).await?;
        Ok(render_cv_page(&stored.profile)?)
    }

    /// Renders the stored profile as an in-memory PDF download.
    pub async fn download_profile(&self, id: Uuid) -> Result<PdfDownload, AppError> {
        let stored = self.get_profile(id).await?;
        Ok(render_cv_pdf(&stored.profile)?)
    }
}
