use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Request kinds. Each kind keeps only its latest request live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    PostList,
    PostDetail,
    UserPosts,
    CreatePost,
    CreateComment,
    Login,
    Register,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the latest request of this kind. Any earlier request
    /// becomes stale.
    pub fn issue(&mut self, id: TaskId) {
        self.active = Some(id);
        self.cancel = None;
    }

    /// Stores the cancel token if the started task is still the latest.
    pub fn on_started(&mut self, started: &TaskStarted) {
        if self.active == Some(started.id) {
            self.cancel.clone_from(&started.cancel);
        }
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub post_list: TaskState,
    pub post_detail: TaskState,
    pub user_posts: TaskState,
    pub create_post: TaskState,
    pub create_comment: TaskState,
    pub login: TaskState,
    pub register: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::PostList => &self.post_list,
            TaskKind::PostDetail => &self.post_detail,
            TaskKind::UserPosts => &self.user_posts,
            TaskKind::CreatePost => &self.create_post,
            TaskKind::CreateComment => &self.create_comment,
            TaskKind::Login => &self.login,
            TaskKind::Register => &self.register,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::PostList => &mut self.post_list,
            TaskKind::PostDetail => &mut self.post_detail,
            TaskKind::UserPosts => &mut self.user_posts,
            TaskKind::CreatePost => &mut self.create_post,
            TaskKind::CreateComment => &mut self.create_comment,
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.post_list.is_running()
            || self.post_detail.is_running()
            || self.user_posts.is_running()
            || self.create_post.is_running()
            || self.create_comment.is_running()
            || self.login.is_running()
            || self.register.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        assert_eq!(seq.next_id(), TaskId(0));
        assert_eq!(seq.next_id(), TaskId(1));
    }

    #[test]
    fn test_only_latest_issued_task_finishes() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let first = seq.next_id();
        let second = seq.next_id();

        state.issue(first);
        state.issue(second);

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
        assert!(!state.finish_if_active(second));
    }

    #[test]
    fn test_started_token_ignored_for_stale_task() {
        let mut state = TaskState::default();
        state.issue(TaskId(2));
        state.on_started(&TaskStarted {
            id: TaskId(1),
            cancel: Some(CancellationToken::new()),
        });
        assert!(state.cancel.is_none());

        state.on_started(&TaskStarted {
            id: TaskId(2),
            cancel: Some(CancellationToken::new()),
        });
        assert!(state.cancel.is_some());
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tasks = Tasks::default();
        tasks.state_mut(TaskKind::PostList).issue(TaskId(0));
        tasks.state_mut(TaskKind::Login).issue(TaskId(1));

        assert!(!tasks.state_mut(TaskKind::PostList).finish_if_active(TaskId(1)));
        assert!(tasks.state_mut(TaskKind::Login).finish_if_active(TaskId(1)));
        assert!(tasks.is_any_running());
        assert!(tasks.state_mut(TaskKind::PostList).finish_if_active(TaskId(0)));
        assert!(!tasks.is_any_running());
    }
}
