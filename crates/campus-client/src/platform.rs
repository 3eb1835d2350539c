//! Page-level loaders composed from the catalog, the in-memory services, and
//! the session.
//!
//! Each loader mirrors one page: it fetches everything the page needs
//! concurrently with `tokio::join!`, then derives the filtered, sorted, and
//! access-annotated view.

use std::collections::HashMap;
use std::time::Duration;

use campus_config::{Backend, CampusConfig, GeneralConfig};
use campus_core::access;
use campus_core::entities::{
    Lecture, NewReview, NewUser, NewWaitlistEntry, Post, Program, User, WaitlistEntry,
};
use campus_core::likes;
use campus_core::responses::{
    AdminStatsResponse, HomeResponse, InsightResponse, LectureResponse, LikeResponse,
    PostSummary, ProfileResponse, ProgramDetailResponse, ProgramSummary, ReviewEntry,
    program_kind,
};
use campus_core::search;
use campus_core::stats::{self, DashboardStats, ProfileStats, UserCounts};
use campus_core::updates::UserUpdate;
use campus_core::validate;

use crate::catalog::{Catalog, MemoryCatalog};
use crate::error::ClientError;
use crate::posts::PostService;
use crate::rest::RestCatalog;
use crate::reviews::ReviewService;
use crate::session::SessionStore;
use crate::users::UserService;
use crate::waitlist::WaitlistService;

const EMPTY_PROGRAM_HINT: &str = "This program is currently being developed. Join the waitlist to be notified when content becomes available.";

/// Everything a command can load or change.
pub struct Platform {
    pub catalog: Catalog,
    pub posts: PostService,
    pub reviews: ReviewService,
    pub users: UserService,
    pub waitlist: WaitlistService,
    pub session: SessionStore,
    general: GeneralConfig,
}

impl Platform {
    /// Build the platform described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the REST client cannot be built.
    pub fn from_config(config: &CampusConfig) -> Result<Self, ClientError> {
        let latency = Duration::from_millis(config.mock.latency_ms);
        let catalog = match config.api.backend {
            Backend::Rest => Catalog::Rest(RestCatalog::new(
                config.api.base_url(),
                Duration::from_secs(config.api.timeout_secs),
            )?),
            Backend::Mock => Catalog::Memory(MemoryCatalog::seeded(latency)),
        };
        tracing::debug!(
            backend = catalog.backend_name(),
            latency_ms = config.mock.latency_ms,
            "platform ready"
        );
        Ok(Self::assemble(
            catalog,
            latency,
            SessionStore::new(config.session.resolve_path()),
            config.general.clone(),
        ))
    }

    /// Seeded in-memory platform without latency.
    #[must_use]
    pub fn in_memory(session: SessionStore) -> Self {
        Self::assemble(
            Catalog::Memory(MemoryCatalog::seeded(Duration::ZERO)),
            Duration::ZERO,
            session,
            GeneralConfig::default(),
        )
    }

    /// Replace the catalog, keeping the in-memory services.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    fn assemble(
        catalog: Catalog,
        latency: Duration,
        session: SessionStore,
        general: GeneralConfig,
    ) -> Self {
        Self {
            catalog,
            posts: PostService::seeded(latency),
            reviews: ReviewService::seeded(latency),
            users: UserService::seeded(latency),
            waitlist: WaitlistService::seeded(latency),
            session,
            general,
        }
    }

    /// The logged-in user from the session file.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.load()
    }

    async fn author_emails(&self) -> HashMap<u64, String> {
        self.users
            .all()
            .await
            .into_iter()
            .map(|u| (u.id, u.email))
            .collect()
    }

    fn summarize(programs: Vec<Program>, lectures: &[Lecture]) -> Vec<ProgramSummary> {
        let counts = stats::lecture_counts(&programs, lectures);
        programs
            .into_iter()
            .map(|program| ProgramSummary {
                kind: program_kind(&program).to_string(),
                lecture_count: counts.get(&program.id).copied().unwrap_or(0),
                program,
            })
            .collect()
    }

    fn with_authors(posts: Vec<Post>, authors: &HashMap<u64, String>) -> Vec<PostSummary> {
        posts
            .into_iter()
            .map(|post| PostSummary {
                author: authors.get(&post.author_id).cloned(),
                post,
            })
            .collect()
    }

    // ── Public pages ───────────────────────────────────────────────

    /// Home: featured programs with lecture counts and the latest posts.
    pub async fn home(&self) -> Result<HomeResponse, ClientError> {
        let (programs, lectures, posts, authors) = tokio::join!(
            self.catalog.programs(),
            self.catalog.lectures(),
            self.posts.published(),
            self.author_emails(),
        );
        let mut programs = programs?;
        programs.truncate(self.general.featured_programs);
        let mut posts = posts;
        posts.truncate(self.general.recent_posts);
        Ok(HomeResponse {
            featured_programs: Self::summarize(programs, &lectures?),
            recent_posts: Self::with_authors(posts, &authors),
        })
    }

    /// Program list filtered by title or description.
    pub async fn programs(&self, term: &str) -> Result<Vec<ProgramSummary>, ClientError> {
        let (programs, lectures) = tokio::join!(self.catalog.programs(), self.catalog.lectures());
        let programs = programs?
            .into_iter()
            .filter(|p| search::program_matches(p, term))
            .collect();
        Ok(Self::summarize(programs, &lectures?))
    }

    /// Program detail: lectures grouped by category and gated for `user`.
    pub async fn program_detail(
        &self,
        slug: &str,
        user: Option<&User>,
    ) -> Result<ProgramDetailResponse, ClientError> {
        let (program, lectures) = tokio::join!(
            self.catalog.program_by_slug(slug),
            self.catalog.program_lectures_by_slug(slug),
        );
        let program = program?;
        let lectures = lectures?;
        Ok(ProgramDetailResponse {
            kind: program_kind(&program).to_string(),
            lecture_count: lectures.len(),
            categories: access::gated_listing(Some(program.slug.as_str()), user, &lectures),
            waitlist_hint: lectures.is_empty().then(|| EMPTY_PROGRAM_HINT.to_string()),
            program,
        })
    }

    /// Lecture page: content when accessible, otherwise the denial reason.
    pub async fn lecture(
        &self,
        id: u64,
        user: Option<&User>,
    ) -> Result<LectureResponse, ClientError> {
        let mut lecture = self.catalog.lecture(id).await?;
        let (program, siblings) = tokio::join!(
            self.catalog.program(lecture.program_id),
            self.catalog.program_lectures(lecture.program_id),
        );
        let program = match program {
            Ok(program) => Some(program),
            Err(ClientError::NotFound { .. }) => {
                tracing::warn!(
                    lecture = id,
                    program = lecture.program_id,
                    "lecture references a missing program"
                );
                None
            }
            Err(e) => return Err(e),
        };
        let siblings = siblings?;
        let slug = program.as_ref().map(|p| p.slug.as_str());
        let decision = access::check(slug, user, &lecture);
        if decision.is_err() {
            lecture.content.clear();
        }
        let navigation = access::navigation(slug, user, &siblings, id);
        Ok(LectureResponse {
            accessible: decision.is_ok(),
            denial: decision.err().map(|reason| reason.message().to_string()),
            navigation,
            lecture,
            program,
        })
    }

    /// Published insights matching `term` in title or content, with authors.
    pub async fn insights(&self, term: &str) -> Vec<PostSummary> {
        let (posts, authors) = tokio::join!(self.posts.published(), self.author_emails());
        let posts = posts
            .into_iter()
            .filter(|p| search::insight_matches(p, term))
            .collect();
        Self::with_authors(posts, &authors)
    }

    /// One published insight with its author and related posts. Drafts are not found.
    pub async fn insight(&self, slug: &str) -> Result<InsightResponse, ClientError> {
        let post = self.posts.by_slug(slug).await?;
        if !post.is_published() {
            return Err(ClientError::not_found("post", slug));
        }
        let (author, related) = tokio::join!(
            self.users.get(post.author_id),
            self.posts.related(post.id, self.general.related_posts),
        );
        Ok(InsightResponse {
            author: author.ok(),
            related,
            post,
        })
    }

    /// Reviews with authors and the viewer's like state.
    pub async fn reviews(&self, viewer: Option<&User>) -> Vec<ReviewEntry> {
        let (reviews, authors) = tokio::join!(self.reviews.all(), self.author_emails());
        reviews
            .into_iter()
            .map(|review| ReviewEntry {
                author: authors.get(&review.author_id).cloned(),
                like_count: review.likes.len(),
                liked: viewer.is_some_and(|u| likes::has_liked(&review.likes, u.id)),
                review,
            })
            .collect()
    }

    pub async fn create_review(&self, user: &User, text: &str) -> Result<ReviewEntry, ClientError> {
        let review = self
            .reviews
            .create(NewReview {
                author_id: user.id,
                text: text.trim().to_string(),
                featured: false,
            })
            .await?;
        Ok(ReviewEntry {
            author: Some(user.email.clone()),
            like_count: 0,
            liked: false,
            review,
        })
    }

    pub async fn like_review(
        &self,
        user: &User,
        review_id: u64,
    ) -> Result<LikeResponse, ClientError> {
        let review = self.reviews.toggle_like(review_id, user.id).await?;
        Ok(LikeResponse {
            review_id,
            liked: likes::has_liked(&review.likes, user.id),
            like_count: review.likes.len(),
        })
    }

    /// Join the waitlist for an existing program.
    pub async fn join_waitlist(
        &self,
        email: &str,
        program_slug: &str,
    ) -> Result<WaitlistEntry, ClientError> {
        validate::email(email)?;
        self.catalog.program_by_slug(program_slug).await?;
        self.waitlist
            .join(NewWaitlistEntry {
                email: email.to_string(),
                program_slug: program_slug.to_string(),
            })
            .await
    }

    // ── Session ────────────────────────────────────────────────────

    /// Log in by email and remember the user.
    pub async fn login(&self, email: &str) -> Result<User, ClientError> {
        let user = self
            .users
            .by_email(email)
            .await
            .ok_or_else(|| ClientError::Rejected("Invalid email or password".into()))?;
        self.session.save(&user)?;
        Ok(user)
    }

    /// Create a student account and log it in.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, ClientError> {
        validate::signup(email, password, confirm_password)?;
        let user = self.users.create(NewUser::signup(email)).await?;
        self.session.save(&user)?;
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.clear()
    }

    pub async fn profile(&self, user: &User) -> Result<ProfileResponse, ClientError> {
        let (programs, lectures, reviews) = tokio::join!(
            self.catalog.programs(),
            self.catalog.lectures(),
            self.reviews.by_author(user.id),
        );
        Ok(ProfileResponse {
            avatar: user.avatar_letter().to_string(),
            stats: ProfileStats::of(user, &programs?, &lectures?, &reviews),
            user: user.clone(),
        })
    }

    /// Update the current user's profile and refresh the session.
    ///
    /// Accounts created in an earlier run are not in the in-memory table; for
    /// those the update is applied to the session copy only.
    pub async fn update_profile(
        &self,
        user: &User,
        update: &UserUpdate,
    ) -> Result<User, ClientError> {
        let updated = match self.users.update(user.id, update).await {
            Ok(updated) => updated,
            Err(ClientError::NotFound { .. }) => {
                if let Some(email) = &update.email {
                    validate::email(email)?;
                }
                tracing::debug!(user = user.id, "user not in table; updating session copy");
                let mut updated = user.clone();
                update.apply(&mut updated);
                updated
            }
            Err(e) => return Err(e),
        };
        self.session.save(&updated)?;
        Ok(updated)
    }

    // ── Admin ──────────────────────────────────────────────────────

    pub async fn admin_stats(&self) -> Result<AdminStatsResponse, ClientError> {
        let (programs, lectures, users, posts, reviews, waitlist) = tokio::join!(
            self.catalog.program_stats(),
            self.catalog.lecture_stats(),
            self.users.all(),
            self.posts.count(),
            self.reviews.count(),
            self.waitlist.count(),
        );
        let programs = programs?;
        let lectures = lectures?;
        let totals = DashboardStats {
            users: users.len(),
            programs: programs.total,
            lectures: lectures.total,
            posts,
            reviews,
            waitlist,
        };
        Ok(AdminStatsResponse {
            content_items: totals.content_items(),
            totals,
            lectures,
            programs,
            users: UserCounts::of(&users),
        })
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::UserRole;
    use pretty_assertions::assert_eq;

    use super::*;

    fn platform() -> (Platform, tempfile::TempDir) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let session = SessionStore::new(Some(tmp.path().join("current_user.json")));
        (Platform::in_memory(session), tmp)
    }

    #[tokio::test]
    async fn home_shows_two_programs_and_three_posts() {
        let (platform, _tmp) = platform();
        let home = platform.home().await.unwrap();
        assert_eq!(home.featured_programs.len(), 2);
        assert_eq!(home.featured_programs[0].lecture_count, 4);
        assert_eq!(home.featured_programs[1].lecture_count, 6);
        let ids: Vec<u64> = home.recent_posts.iter().map(|p| p.post.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            home.recent_posts[0].author.as_deref(),
            Some("john.doe@example.com")
        );
    }

    #[tokio::test]
    async fn anonymous_master_program_listing() {
        let (platform, _tmp) = platform();
        let detail = platform.program_detail("text-influencer", None).await.unwrap();
        let locked: Vec<u64> = detail
            .categories
            .iter()
            .flat_map(|g| g.lectures.iter())
            .filter(|l| !l.accessible)
            .map(|l| l.id)
            .collect();
        assert_eq!(locked, vec![7, 8, 10]);
        assert_eq!(detail.kind, "Master Course");
        assert!(detail.waitlist_hint.is_none());
    }

    #[tokio::test]
    async fn locked_lecture_hides_content() {
        let (platform, _tmp) = platform();
        let page = platform.lecture(7, None).await.unwrap();
        assert!(!page.accessible);
        assert!(page.lecture.content.is_empty());
        assert_eq!(
            page.denial.as_deref(),
            Some("Please log in to access this lecture.")
        );
        assert_eq!(page.navigation.previous.map(|l| l.id), Some(6));
        assert_eq!(page.navigation.next.map(|l| l.id), Some(9));
    }

    #[tokio::test]
    async fn master_opens_master_lecture() {
        let (platform, _tmp) = platform();
        let master = platform.users.get(2).await.unwrap();
        assert_eq!(master.role, UserRole::Master);
        let page = platform.lecture(7, Some(&master)).await.unwrap();
        assert!(page.accessible);
        assert!(!page.lecture.content.is_empty());
        assert_eq!(page.navigation.position, 3);
        assert_eq!(page.navigation.total, 6);
    }

    #[tokio::test]
    async fn signup_logs_in_and_logout_clears() {
        let (platform, _tmp) = platform();
        let user = platform
            .signup("fresh@example.com", "pw", "pw")
            .await
            .unwrap();
        assert_eq!(platform.current_user().map(|u| u.id), Some(user.id));
        platform.logout().unwrap();
        assert!(platform.current_user().is_none());
    }

    #[tokio::test]
    async fn login_with_unknown_email_fails() {
        let (platform, _tmp) = platform();
        let err = platform.login("ghost@example.com").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(platform.current_user().is_none());
    }

    #[tokio::test]
    async fn like_toggles_for_viewer() {
        let (platform, _tmp) = platform();
        let user = platform.login("david.kim@example.com").await.unwrap();
        let liked = platform.like_review(&user, 3).await.unwrap();
        assert!(liked.liked);
        assert_eq!(liked.like_count, 1);
        let entries = platform.reviews(Some(&user)).await;
        assert!(entries.iter().any(|e| e.review.id == 3 && e.liked));
        let unliked = platform.like_review(&user, 3).await.unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.like_count, 0);
    }

    #[tokio::test]
    async fn waitlist_requires_known_program() {
        let (platform, _tmp) = platform();
        let err = platform
            .join_waitlist("a@example.com", "cooking")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound { .. }));
        assert!(platform.join_waitlist("a@example.com", "membership").await.is_ok());
    }

    #[tokio::test]
    async fn profile_update_for_stale_session_user() {
        let (platform, _tmp) = platform();
        let mut ghost = platform.users.get(3).await.unwrap();
        ghost.id = 77;
        let update = UserUpdate {
            master_cohort: Some(String::from("Cohort 9")),
            ..UserUpdate::default()
        };
        let updated = platform.update_profile(&ghost, &update).await.unwrap();
        assert_eq!(updated.master_cohort, "Cohort 9");
        assert_eq!(platform.current_user().map(|u| u.id), Some(77));
    }

    #[tokio::test]
    async fn admin_stats_count_seed_data() {
        let (platform, _tmp) = platform();
        let stats = platform.admin_stats().await.unwrap();
        assert_eq!(stats.totals.users, 5);
        assert_eq!(stats.totals.programs, 2);
        assert_eq!(stats.totals.lectures, 10);
        assert_eq!(stats.totals.posts, 5);
        assert_eq!(stats.totals.reviews, 5);
        assert_eq!(stats.totals.waitlist, 3);
        assert_eq!(stats.content_items, 15);
        assert_eq!(stats.users.admins, 1);
        assert_eq!(stats.programs.with_common_course, 1);
        assert_eq!(
            (stats.lectures.member, stats.lectures.master, stats.lectures.master_common),
            (4, 3, 3)
        );
    }
}
