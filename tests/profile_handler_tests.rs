use async_trait::async_trait;
use mockall::mock;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use cv_backend::{
    entities::{
        education::Education,
        experience::Experience,
        language::Language,
        profile::{Profile, ProfileInsert, ProfileUpdate, StoredProfile},
        skill::Skill,
    },
    errors::AppError,
    repositories::profile::ProfileRepository,
    use_cases::profiles::ProfileHandler,
};

mock! {
    ProfileRepo {}

    #[async_trait]
    impl ProfileRepository for ProfileRepo {
        async fn create_profile(&self, insert: &ProfileInsert) -> Result<Uuid, AppError>;
        async fn get_profile(&self, id: Uuid) -> Result<Option<StoredProfile>, AppError>;
        async fn list_profiles(&self) -> Result<Vec<StoredProfile>, AppError>;
        async fn update_profile(&self, id: Uuid, patch: &JsonValue) -> Result<bool, AppError>;
        async fn delete_profile(&self, id: Uuid) -> Result<bool, AppError>;
        async fn check_connection(&self) -> Result<(), AppError>;
    }
}

fn sample_profile() -> Profile {
    Profile {
        name: "Ana Ruiz".into(),
        email: "ana@example.com".into(),
        phone: "+573000000000".into(),
        location: "Bogotá".into(),
        summary: "Backend engineer with ten years of experience building document \
                  pipelines and HTTP services."
            .into(),
        experiences: vec![Experience {
            company: "Acme Corp".into(),
            position: "Backend Engineer".into(),
            start_date: "2021-03".into(),
            end_date: None,
            description: "Designed and ran the billing pipeline.".into(),
        }],
        education: vec![Education {
            institution: "National University".into(),
            degree: "BSc".into(),
            field: "Computer Science".into(),
            start_date: "2015-01".into(),
            end_date: "2019-12".into(),
        }],
        skills: vec![Skill { name: "Rust".into(), level: "Advanced".into() }],
        languages: vec![Language { name: "Spanish".into(), level: "C2".into() }],
    }
}

fn stored(id: Uuid, profile: Profile) -> StoredProfile {
    let now = chrono::Utc::now();
    StoredProfile {
        id,
        profile,
        created_at: now,
        updated_at: now,
    }
}

// ───── create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_valid_profile_returns_generated_id() {
    let mut repo = MockProfileRepo::new();
    repo.expect_create_profile()
        .times(1)
        .returning(|insert| Ok(insert.id));

    let handler = ProfileHandler::new(repo);
    let response = handler.create_profile(sample_profile()).await.unwrap();

    assert!(!response.id.is_nil());
    assert_eq!(response.message, "Profile created successfully");
}

#[tokio::test]
async fn create_with_invalid_phone_never_reaches_the_store() {
    // No expectation set: any repository call would panic the mock.
    let handler = ProfileHandler::new(MockProfileRepo::new());

    let mut profile = sample_profile();
    profile.phone = "not-a-phone".into();

    match handler.create_profile(profile).await {
        Err(AppError::ValidationError(details)) => {
            assert!(details.iter().any(|f| f.field == "phone"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_with_bad_language_level_names_the_nested_field() {
    let handler = ProfileHandler::new(MockProfileRepo::new());

    let mut profile = sample_profile();
    profile.languages[0].level = "D1".into();

    match handler.create_profile(profile).await {
        Err(AppError::ValidationError(details)) => {
            assert!(details.iter().any(|f| f.field == "languages[0].level"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ───── get / list ───────────────────────────────────────────────────

#[tokio::test]
async fn stored_profile_round_trips_all_fields() {
    let id = Uuid::new_v4();
    let profile = sample_profile();
    let expected = profile.clone();

    let mut repo = MockProfileRepo::new();
    repo.expect_get_profile()
        .returning(move |id| Ok(Some(stored(id, profile.clone()))));

    let handler = ProfileHandler::new(repo);
    let fetched = handler.get_profile(id).await.unwrap();

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.profile, expected);
}

#[tokio::test]
async fn get_unknown_profile_is_not_found() {
    let mut repo = MockProfileRepo::new();
    repo.expect_get_profile().returning(|_| Ok(None));

    let handler = ProfileHandler::new(repo);

    assert!(matches!(
        handler.get_profile(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn list_on_empty_store_is_an_empty_sequence() {
    let mut repo = MockProfileRepo::new();
    repo.expect_list_profiles().returning(|| Ok(Vec::new()));

    let handler = ProfileHandler::new(repo);

    assert!(handler.list_profiles().await.unwrap().is_empty());
}

// ───── update ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_with_empty_patch_is_rejected_without_a_write() {
    let handler = ProfileHandler::new(MockProfileRepo::new());

    let result = handler
        .update_profile(Uuid::new_v4(), ProfileUpdate::default())
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn update_passes_only_the_supplied_fields() {
    let mut repo = MockProfileRepo::new();
    repo.expect_update_profile()
        .withf(|_, patch| {
            let object = patch.as_object().unwrap();
            object.len() == 1 && object.contains_key("location")
        })
        .times(1)
        .returning(|_, _| Ok(true));

    let handler = ProfileHandler::new(repo);
    let update = ProfileUpdate {
        location: Some("Medellín".into()),
        ..Default::default()
    };

    let response = handler.update_profile(Uuid::new_v4(), update).await.unwrap();
    assert_eq!(response.message, "Profile updated successfully");
}

#[tokio::test]
async fn update_of_unknown_profile_reports_not_found() {
    let mut repo = MockProfileRepo::new();
    repo.expect_update_profile().returning(|_, _| Ok(false));

    let handler = ProfileHandler::new(repo);
    let update = ProfileUpdate {
        location: Some("Medellín".into()),
        ..Default::default()
    };

    assert!(matches!(
        handler.update_profile(Uuid::new_v4(), update).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn update_with_invalid_field_never_reaches_the_store() {
    let handler = ProfileHandler::new(MockProfileRepo::new());

    let update = ProfileUpdate {
        phone: Some("12".into()),
        ..Default::default()
    };

    assert!(matches!(
        handler.update_profile(Uuid::new_v4(), update).await,
        Err(AppError::ValidationError(_))
    ));
}

// ───── delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_existing_profile_succeeds() {
    let mut repo = MockProfileRepo::new();
    repo.expect_delete_profile().times(1).returning(|_| Ok(true));

    let handler = ProfileHandler::new(repo);
    let response = handler.delete_profile(Uuid::new_v4()).await.unwrap();

    assert_eq!(response.message, "Profile deleted successfully");
}

#[tokio::test]
async fn repeated_delete_reports_not_found_each_time() {
    let mut repo = MockProfileRepo::new();
    repo.expect_delete_profile().times(2).returning(|_| Ok(false));

    let handler = ProfileHandler::new(repo);
    let id = Uuid::new_v4();

    assert!(matches!(handler.delete_profile(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(handler.delete_profile(id).await, Err(AppError::NotFound(_))));
}

// ───── rendering ────────────────────────────────────────────────────

#[tokio::test]
async fn view_embeds_the_profile_name_in_html() {
    let mut repo = MockProfileRepo::new();
    repo.expect_get_profile()
        .returning(|id| Ok(Some(stored(id, sample_profile()))));

    let handler = ProfileHandler::new(repo);
    let html = handler.view_profile(Uuid::new_v4()).await.unwrap();

    assert!(html.contains("Ana Ruiz"));
    assert!(html.contains("<h2>Work Experience</h2>"));
}

#[tokio::test]
async fn download_yields_pdf_bytes_and_a_derived_filename() {
    let mut repo = MockProfileRepo::new();
    repo.expect_get_profile()
        .returning(|id| Ok(Some(stored(id, sample_profile()))));

    let handler = ProfileHandler::new(repo);
    let download = handler.download_profile(Uuid::new_v4()).await.unwrap();

    assert!(download.bytes.starts_with(b"%PDF"));
    assert_eq!(download.filename, "cv_ana-ruiz.pdf");
}

#[tokio::test]
async fn view_of_unknown_profile_is_not_found() {
    let mut repo = MockProfileRepo::new();
    repo.expect_get_profile().returning(|_| Ok(None));

    let handler = ProfileHandler::new(repo);

    assert!(matches!(
        handler.view_profile(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}
