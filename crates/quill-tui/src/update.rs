//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Task effects leave this module with a fresh `TaskId` that is already the
//! latest for its kind, so a completion is applied only when it answers the
//! most recent request of that kind. Create results additionally carry the
//! `PageId` of the page that sent them and only touch that same opening.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quill_types::User;

use crate::common::{PageId, TaskKind};
use crate::effects::UiEffect;
use crate::events::{ApiUiEvent, UiEvent};
use crate::mutations::StateMutation;
use crate::pages::{Page, PageRequest, PageTransition, PageUpdate};
use crate::state::{AppState, TuiState};
use crate::{auth, blog};

const REGISTERED_NOTICE: &str = "Registered; please log in";

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Init { user } => handle_init(app, user),
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale response");
                vec![]
            }
        }
        UiEvent::Api(event) => handle_api_event(app, event),
    };
    assign_task_ids(&mut app.tui, effects)
}

/// Gives each new task effect a fresh id and marks it as the latest of its
/// kind. A superseded request that already started is cancelled.
fn assign_task_ids(tui: &mut TuiState, effects: Vec<UiEffect>) -> Vec<UiEffect> {
    let mut out = Vec::with_capacity(effects.len());
    for mut effect in effects {
        if let Some((kind, slot)) = effect.task_slot()
            && slot.is_none()
        {
            let id = tui.task_seq.next_id();
            *slot = Some(id);
            let state = tui.tasks.state_mut(kind);
            if let Some(token) = state.cancel.take() {
                out.push(UiEffect::CancelTask {
                    kind,
                    token: Some(token),
                });
            }
            state.issue(id);
        }
        out.push(effect);
    }
    out
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Auth(action) => {
                tui.auth = auth::reduce(std::mem::take(&mut tui.auth), action);
            }
            StateMutation::Blog(action) => {
                tracing::trace!(action = action.name(), "blog action");
                tui.blog = blog::reduce(std::mem::take(&mut tui.blog), action);
            }
        }
    }
}

// ============================================================================
// Page Navigation
// ============================================================================

fn apply_page_update(app: &mut AppState, update: PageUpdate) -> Vec<UiEffect> {
    apply_mutations(&mut app.tui, update.mutations);
    let mut effects = update.effects;
    match update.transition {
        PageTransition::Stay => {}
        PageTransition::Open(request) => effects.extend(open_page(app, request)),
    }
    effects
}

fn open_page(app: &mut AppState, request: PageRequest) -> Vec<UiEffect> {
    let mut effects = leave_page(app);
    let id = app.tui.next_page_id();
    let (page, mutations, page_effects) = Page::open(request, id, &app.tui);
    tracing::debug!(from = app.page.name(), to = page.name(), "navigate");
    app.page = page;
    apply_mutations(&mut app.tui, mutations);
    effects.extend(page_effects);
    effects
}

/// Teardown for the page being left.
fn leave_page(app: &mut AppState) -> Vec<UiEffect> {
    match &app.page {
        Page::PostDetail(_) => {
            apply_mutations(
                &mut app.tui,
                vec![StateMutation::Blog(blog::BlogAction::ClearCurrentPost)],
            );
            let state = app.tui.tasks.state_mut(TaskKind::PostDetail);
            let token = state.cancel.take();
            state.clear();
            vec![UiEffect::CancelTask {
                kind: TaskKind::PostDetail,
                token,
            }]
        }
        Page::Profile(_) => {
            let state = app.tui.tasks.state_mut(TaskKind::UserPosts);
            let token = state.cancel.take();
            state.clear();
            vec![UiEffect::CancelTask {
                kind: TaskKind::UserPosts,
                token,
            }]
        }
        Page::Home(_)
        | Page::Compose(_)
        | Page::Login(_)
        | Page::Register(_) => vec![],
    }
}

// ============================================================================
// Session
// ============================================================================

fn handle_init(app: &mut AppState, user: Option<User>) -> Vec<UiEffect> {
    if let Some(user) = user {
        tracing::info!(username = %user.username, "restored session");
        apply_mutations(
            &mut app.tui,
            vec![StateMutation::Auth(auth::AuthAction::Login(user))],
        );
    }
    open_page(app, PageRequest::Home { refresh: true })
}

fn logout(app: &mut AppState) -> Vec<UiEffect> {
    apply_mutations(
        &mut app.tui,
        vec![StateMutation::Auth(auth::AuthAction::Logout)],
    );
    let mut effects = vec![UiEffect::ClearSession];
    effects.extend(open_page(app, PageRequest::Login { notice: None }));
    effects
}

// ============================================================================
// API Results
// ============================================================================

fn handle_api_event(app: &mut AppState, event: ApiUiEvent) -> Vec<UiEffect> {
    match event {
        ApiUiEvent::PostsLoaded(result) => {
            let action = match result {
                Ok(posts) => blog::BlogAction::FetchPostsSuccess(posts),
                Err(message) => blog::BlogAction::FetchPostsFailure(message),
            };
            apply_mutations(&mut app.tui, vec![StateMutation::Blog(action)]);
            vec![]
        }
        ApiUiEvent::PostLoaded { post_id, result } => {
            if let Page::PostDetail(detail) = &mut app.page
                && detail.post_id == post_id
                && let Some(post) = detail.on_loaded(result)
            {
                apply_mutations(
                    &mut app.tui,
                    vec![StateMutation::Blog(blog::BlogAction::SetCurrentPost(post))],
                );
            }
            vec![]
        }
        ApiUiEvent::UserPostsLoaded { user_id, result } => {
            if let Page::Profile(profile) = &mut app.page {
                profile.on_loaded(user_id, result);
            }
            vec![]
        }
        ApiUiEvent::PostCreated { page, result } => handle_post_created(app, page, result),
        ApiUiEvent::CommentCreated {
            page,
            post_id,
            result,
        } => {
            match &mut app.page {
                Page::PostDetail(detail) if detail.id == page && detail.post_id == post_id => {
                    detail.on_comment_created(result);
                }
                _ => {
                    tracing::debug!(post_id, page = page.0, "dropping comment for a closed page");
                }
            }
            vec![]
        }
        ApiUiEvent::LoggedIn(result) => match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "signed in");
                apply_mutations(
                    &mut app.tui,
                    vec![StateMutation::Auth(auth::AuthAction::Login(user.clone()))],
                );
                let mut effects = vec![UiEffect::SaveSession { user }];
                if matches!(app.page, Page::Login(_)) {
                    effects.extend(open_page(app, PageRequest::Home { refresh: true }));
                }
                effects
            }
            Err(message) => {
                if let Page::Login(form) = &mut app.page {
                    form.on_failed(message);
                }
                vec![]
            }
        },
        ApiUiEvent::Registered(result) => match result {
            Ok(response) => {
                tracing::info!(user_id = response.user_id, "registered");
                if matches!(app.page, Page::Register(_)) {
                    open_page(
                        app,
                        PageRequest::Login {
                            notice: Some(REGISTERED_NOTICE.to_string()),
                        },
                    )
                } else {
                    vec![]
                }
            }
            Err(message) => {
                if let Page::Register(form) = &mut app.page {
                    form.on_failed(message);
                }
                vec![]
            }
        },
    }
}

/// A created post returns the user to the list when they are still on the
/// form that sent it. Whether the list is fetched again is controlled by
/// `refetch_after_create`.
fn handle_post_created(
    app: &mut AppState,
    page: PageId,
    result: Result<quill_types::Post, String>,
) -> Vec<UiEffect> {
    let refresh = app.tui.config.refetch_after_create;
    let sender_open = matches!(&app.page, Page::Compose(compose) if compose.id == page);
    match result {
        Ok(post) => {
            tracing::info!(post_id = post.id, "post created");
            if sender_open {
                open_page(app, PageRequest::Home { refresh })
            } else if refresh {
                apply_mutations(
                    &mut app.tui,
                    vec![StateMutation::Blog(blog::BlogAction::FetchPostsStart)],
                );
                vec![UiEffect::FetchPosts { task: None }]
            } else {
                vec![]
            }
        }
        Err(message) => {
            match &mut app.page {
                Page::Compose(compose) if sender_open => compose.on_failed(message),
                _ => {
                    tracing::debug!(page = page.0, %message, "dropping post error for a closed page");
                }
            }
            vec![]
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.tui.should_quit = true;
        return vec![UiEffect::Quit];
    }

    if !app.page.captures_text(&app.tui)
        && let Some(effects) = handle_global_key(app, key)
    {
        return effects;
    }

    let update = app.page.handle_key(&app.tui, key);
    apply_page_update(app, update)
}

/// Navbar shortcuts. Returns `None` when the key is not global.
fn handle_global_key(app: &mut AppState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let signed_in = app.tui.auth.is_authenticated();
    let effects = match c {
        'q' => {
            app.tui.should_quit = true;
            vec![UiEffect::Quit]
        }
        'h' => open_page(app, PageRequest::Home { refresh: true }),
        'n' => open_page(app, PageRequest::Compose),
        'p' if signed_in => open_page(app, PageRequest::Profile),
        'o' if signed_in => logout(app),
        'l' if !signed_in => open_page(app, PageRequest::Login { notice: None }),
        'g' if !signed_in => open_page(app, PageRequest::Register),
        _ => return None,
    };
    Some(effects)
}

#[cfg(test)]
mod tests {
    use quill_core::config::Config;
    use quill_types::{Author, Comment, Post, RegisterResponse, Timestamp};

    use super::*;
    use crate::blog::FetchStatus;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn user() -> User {
        User {
            id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
        }
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            content: "content".into(),
            author: Author {
                id: 1,
                username: "ada".into(),
            },
            created_at: Timestamp::new("2024-05-01T10:00:00Z"),
            updated_at: Timestamp::new("2024-05-01T10:00:00Z"),
            tags: vec![],
            category: String::new(),
        }
    }

    fn key(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
    }

    fn code(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn task_id(effects: &[UiEffect], kind: TaskKind) -> TaskId {
        effects
            .iter()
            .find_map(|effect| match (kind, effect) {
                (TaskKind::PostList, UiEffect::FetchPosts { task })
                | (TaskKind::PostDetail, UiEffect::FetchPost { task, .. })
                | (TaskKind::UserPosts, UiEffect::FetchUserPosts { task, .. })
                | (TaskKind::CreatePost, UiEffect::CreatePost { task, .. })
                | (TaskKind::CreateComment, UiEffect::CreateComment { task, .. }) => *task,
                _ => None,
            })
            .expect("task effect")
    }

    fn complete(kind: TaskKind, id: TaskId, event: ApiUiEvent) -> UiEvent {
        UiEvent::TaskCompleted {
            kind,
            completed: TaskCompleted {
                id,
                result: Box::new(UiEvent::Api(event)),
            },
        }
    }

    #[test]
    fn test_init_restores_user_and_fetches_posts() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Init { user: Some(user()) });

        assert!(app.tui.auth.is_authenticated());
        assert!(app.tui.blog.loading());
        assert!(matches!(app.page, Page::Home(_)));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::FetchPosts { task: Some(_) }]
        ));
    }

    #[test]
    fn test_posts_loaded_replaces_list() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Init { user: None });
        let id = task_id(&effects, TaskKind::PostList);

        update(
            &mut app,
            complete(
                TaskKind::PostList,
                id,
                ApiUiEvent::PostsLoaded(Ok(vec![post(1), post(2)])),
            ),
        );

        assert_eq!(app.tui.blog.posts().len(), 2);
        assert_eq!(app.tui.blog.status(), &FetchStatus::Idle);
        assert!(!app.tui.tasks.state(TaskKind::PostList).is_running());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = app();
        let first = update(&mut app, UiEvent::Init { user: None });
        let first_id = task_id(&first, TaskKind::PostList);
        let second = update(&mut app, key('r'));
        let second_id = task_id(&second, TaskKind::PostList);
        assert_ne!(first_id, second_id);

        // The newer request answers first.
        update(
            &mut app,
            complete(
                TaskKind::PostList,
                second_id,
                ApiUiEvent::PostsLoaded(Ok(vec![post(2)])),
            ),
        );
        // The older one arrives late and must not overwrite it.
        update(
            &mut app,
            complete(
                TaskKind::PostList,
                first_id,
                ApiUiEvent::PostsLoaded(Ok(vec![post(1), post(3)])),
            ),
        );

        assert_eq!(app.tui.blog.posts(), &[post(2)]);
    }

    #[test]
    fn test_refetch_cancels_started_request() {
        let mut app = app();
        let first = update(&mut app, UiEvent::Init { user: None });
        let first_id = task_id(&first, TaskKind::PostList);
        let token = tokio_util::sync::CancellationToken::new();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::PostList,
                started: TaskStarted {
                    id: first_id,
                    cancel: Some(token.clone()),
                },
            },
        );

        let effects = update(&mut app, key('r'));
        assert!(effects.iter().any(|effect| matches!(
            effect,
            UiEffect::CancelTask {
                kind: TaskKind::PostList,
                token: Some(_)
            }
        )));
    }

    #[test]
    fn test_fetch_failure_sets_error() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Init { user: None });
        let id = task_id(&effects, TaskKind::PostList);
        update(
            &mut app,
            complete(
                TaskKind::PostList,
                id,
                ApiUiEvent::PostsLoaded(Err("HTTP 500".into())),
            ),
        );
        assert_eq!(app.tui.blog.error(), Some("HTTP 500"));
        assert!(!app.tui.blog.loading());
    }

    #[test]
    fn test_opening_and_leaving_detail_manages_current_post() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Init { user: None });
        let id = task_id(&effects, TaskKind::PostList);
        update(
            &mut app,
            complete(
                TaskKind::PostList,
                id,
                ApiUiEvent::PostsLoaded(Ok(vec![post(1), post(2)])),
            ),
        );

        update(&mut app, key('j'));
        let effects = update(&mut app, code(KeyCode::Enter));
        assert_eq!(app.tui.blog.current_post().map(|p| p.id), Some(2));
        let detail_id = task_id(&effects, TaskKind::PostDetail);

        let comment = Comment {
            id: 9,
            content: "nice".into(),
            author: Author {
                id: 5,
                username: "bob".into(),
            },
            created_at: Timestamp::new("2024-05-02T10:00:00Z"),
            updated_at: Timestamp::new("2024-05-02T10:00:00Z"),
            post_id: 2,
        };
        update(
            &mut app,
            complete(
                TaskKind::PostDetail,
                detail_id,
                ApiUiEvent::PostLoaded {
                    post_id: 2,
                    result: Ok((post(2), vec![comment])),
                },
            ),
        );
        match &app.page {
            Page::PostDetail(detail) => assert_eq!(detail.comments.len(), 1),
            other => panic!("unexpected page: {}", other.name()),
        }

        let effects = update(&mut app, code(KeyCode::Esc));
        assert!(app.tui.blog.current_post().is_none());
        assert!(matches!(app.page, Page::Home(_)));
        assert!(effects.iter().any(|effect| matches!(
            effect,
            UiEffect::CancelTask {
                kind: TaskKind::PostDetail,
                ..
            }
        )));
        assert!(!app.tui.tasks.state(TaskKind::PostDetail).is_running());
    }

    #[test]
    fn test_login_saves_session_and_goes_home() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        update(&mut app, key('l'));
        assert!(matches!(app.page, Page::Login(_)));

        let effects = update(&mut app, UiEvent::Api(ApiUiEvent::LoggedIn(Ok(user()))));
        assert_eq!(app.tui.auth.user(), Some(&user()));
        assert!(matches!(app.page, Page::Home(_)));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, UiEffect::SaveSession { user } if user.id == 1))
        );
    }

    #[test]
    fn test_login_failure_stays_on_form() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        update(&mut app, key('l'));
        update(
            &mut app,
            UiEvent::Api(ApiUiEvent::LoggedIn(Err("HTTP 401".into()))),
        );
        assert!(!app.tui.auth.is_authenticated());
        match &app.page {
            Page::Login(form) => assert_eq!(form.error.as_deref(), Some("HTTP 401")),
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    #[test]
    fn test_logout_clears_session() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: Some(user()) });
        let effects = update(&mut app, key('o'));
        assert!(!app.tui.auth.is_authenticated());
        assert!(matches!(app.page, Page::Login(_)));
        assert!(matches!(effects.first(), Some(UiEffect::ClearSession)));
    }

    #[test]
    fn test_signed_in_only_keys_are_ignored_when_signed_out() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        let effects = update(&mut app, key('o'));
        assert!(effects.is_empty());
        update(&mut app, key('p'));
        assert!(matches!(app.page, Page::Home(_)));
    }

    #[test]
    fn test_registration_opens_login_with_notice() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        update(&mut app, key('g'));
        update(
            &mut app,
            UiEvent::Api(ApiUiEvent::Registered(Ok(RegisterResponse {
                message: "ok".into(),
                user_id: 4,
            }))),
        );
        match &app.page {
            Page::Login(form) => assert_eq!(form.notice.as_deref(), Some(REGISTERED_NOTICE)),
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    fn compose_id(app: &AppState) -> PageId {
        match &app.page {
            Page::Compose(compose) => compose.id,
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    fn post_created(page: PageId, result: Result<Post, String>) -> UiEvent {
        UiEvent::Api(ApiUiEvent::PostCreated { page, result })
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(c));
        }
    }

    #[test]
    fn test_comment_result_skips_reopened_detail_page() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Init { user: Some(user()) });
        let id = task_id(&effects, TaskKind::PostList);
        update(
            &mut app,
            complete(
                TaskKind::PostList,
                id,
                ApiUiEvent::PostsLoaded(Ok(vec![post(4)])),
            ),
        );

        update(&mut app, code(KeyCode::Enter));
        update(&mut app, key('c'));
        type_text(&mut app, "x");
        let effects = update(&mut app, code(KeyCode::Enter));
        let comment_task = task_id(&effects, TaskKind::CreateComment);
        let Some(UiEffect::CreateComment { page, .. }) = effects
            .iter()
            .find(|effect| matches!(effect, UiEffect::CreateComment { .. }))
        else {
            panic!("expected a comment request");
        };
        let first_page = *page;

        // Leave the comment box, then the page, then come back to the same post.
        update(&mut app, code(KeyCode::Esc));
        update(&mut app, code(KeyCode::Esc));
        assert!(matches!(app.page, Page::Home(_)));
        update(&mut app, code(KeyCode::Enter));
        update(&mut app, key('c'));
        type_text(&mut app, "y");

        update(
            &mut app,
            complete(
                TaskKind::CreateComment,
                comment_task,
                ApiUiEvent::CommentCreated {
                    page: first_page,
                    post_id: 4,
                    result: Ok(Comment {
                        id: 1,
                        content: "x".into(),
                        author: Author {
                            id: 1,
                            username: "ada".into(),
                        },
                        created_at: Timestamp::new("2024-05-02T10:00:00Z"),
                        updated_at: Timestamp::new("2024-05-02T10:00:00Z"),
                        post_id: 4,
                    }),
                },
            ),
        );

        match &app.page {
            Page::PostDetail(detail) => {
                assert_ne!(detail.id, first_page);
                assert_eq!(detail.post_id, 4);
                assert_eq!(detail.comment_input, "y");
                assert!(detail.comments.is_empty());
                assert!(!detail.submitting);
            }
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    #[test]
    fn test_post_result_skips_reopened_compose_page() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: Some(user()) });
        update(&mut app, key('n'));
        let first_page = compose_id(&app);

        update(&mut app, code(KeyCode::Esc));
        update(&mut app, key('n'));
        type_text(&mut app, "draft");
        assert_ne!(compose_id(&app), first_page);

        let effects = update(&mut app, post_created(first_page, Ok(post(3))));
        match &app.page {
            Page::Compose(compose) => assert_eq!(compose.title, "draft"),
            other => panic!("unexpected page: {}", other.name()),
        }
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, UiEffect::FetchPosts { .. }))
        );

        update(&mut app, post_created(first_page, Err("HTTP 500".into())));
        match &app.page {
            Page::Compose(compose) => assert!(compose.error.is_none()),
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    #[test]
    fn test_post_created_refetches_when_enabled() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: Some(user()) });
        update(&mut app, key('n'));
        assert!(matches!(app.page, Page::Compose(_)));

        let page = compose_id(&app);
        let effects = update(&mut app, post_created(page, Ok(post(3))));
        assert!(matches!(app.page, Page::Home(_)));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, UiEffect::FetchPosts { .. }))
        );
    }

    #[test]
    fn test_post_created_skips_refetch_when_disabled() {
        let mut config = Config::default();
        config.refetch_after_create = false;
        let mut app = AppState::new(config);
        update(&mut app, UiEvent::Init { user: Some(user()) });
        update(&mut app, key('n'));

        let page = compose_id(&app);
        let effects = update(&mut app, post_created(page, Ok(post(3))));
        assert!(matches!(app.page, Page::Home(_)));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_typing_in_forms_does_not_trigger_shortcuts() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        update(&mut app, key('l'));
        let effects = update(&mut app, key('q'));
        assert!(effects.is_empty());
        assert!(!app.tui.should_quit);
        match &app.page {
            Page::Login(form) => assert_eq!(form.username, "q"),
            other => panic!("unexpected page: {}", other.name()),
        }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        update(&mut app, UiEvent::Init { user: None });
        update(&mut app, key('l'));
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.tui.should_quit);
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
