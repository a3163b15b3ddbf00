use crossterm::event::{KeyCode, KeyEvent};
use quill_types::{Credentials, Registration};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::form::{self, FieldView, FormStatus};
use super::post_detail::non_empty;
use super::{PageRequest, PageUpdate};
use crate::effects::UiEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Sign-in form.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn open(notice: Option<String>) -> Self {
        Self {
            notice,
            ..Self::default()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageUpdate {
        match key.code {
            KeyCode::Esc => PageUpdate::open(PageRequest::Home { refresh: true }),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
                PageUpdate::stay()
            }
            KeyCode::Enter => self.submit(),
            _ => {
                let value = match self.focus {
                    LoginField::Username => &mut self.username,
                    LoginField::Password => &mut self.password,
                };
                form::edit_text(value, key, false);
                PageUpdate::stay()
            }
        }
    }

    fn submit(&mut self) -> PageUpdate {
        if self.submitting {
            return PageUpdate::stay();
        }
        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return PageUpdate::stay();
        }
        self.error = None;
        self.notice = None;
        self.submitting = true;
        let credentials = Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        PageUpdate::stay().with_ui_effects(vec![UiEffect::Login {
            task: None,
            credentials,
        }])
    }

    pub fn on_failed(&mut self, message: String) {
        self.submitting = false;
        self.password.clear();
        self.error = Some(non_empty(message, "Login failed"));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let fields = [
            FieldView::new("Username", &self.username, self.focus == LoginField::Username),
            FieldView::new("Password", &self.password, self.focus == LoginField::Password)
                .masked(),
        ];
        let status = FormStatus {
            error: self.error.as_deref(),
            notice: self.notice.as_deref(),
            busy: self.submitting.then_some("Signing in..."),
        };
        form::render_form(frame, area, "Login", &fields, vec![], &status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Email,
    Password,
}

/// Account creation form.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: RegisterField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegisterForm {
    pub fn handle_key(&mut self, key: KeyEvent) -> PageUpdate {
        match key.code {
            KeyCode::Esc => PageUpdate::open(PageRequest::Home { refresh: true }),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    RegisterField::Username => RegisterField::Email,
                    RegisterField::Email => RegisterField::Password,
                    RegisterField::Password => RegisterField::Username,
                };
                PageUpdate::stay()
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    RegisterField::Username => RegisterField::Password,
                    RegisterField::Email => RegisterField::Username,
                    RegisterField::Password => RegisterField::Email,
                };
                PageUpdate::stay()
            }
            KeyCode::Enter => self.submit(),
            _ => {
                let value = match self.focus {
                    RegisterField::Username => &mut self.username,
                    RegisterField::Email => &mut self.email,
                    RegisterField::Password => &mut self.password,
                };
                form::edit_text(value, key, false);
                PageUpdate::stay()
            }
        }
    }

    fn submit(&mut self) -> PageUpdate {
        if self.submitting {
            return PageUpdate::stay();
        }
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            self.error = Some("All fields are required".to_string());
            return PageUpdate::stay();
        }
        self.error = None;
        self.submitting = true;
        let registration = Registration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        PageUpdate::stay().with_ui_effects(vec![UiEffect::Register {
            task: None,
            registration,
        }])
    }

    pub fn on_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(non_empty(message, "Registration failed"));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let fields = [
            FieldView::new(
                "Username",
                &self.username,
                self.focus == RegisterField::Username,
            ),
            FieldView::new("Email", &self.email, self.focus == RegisterField::Email),
            FieldView::new(
                "Password",
                &self.password,
                self.focus == RegisterField::Password,
            )
            .masked(),
        ];
        let status = FormStatus {
            error: self.error.as_deref(),
            busy: self.submitting.then_some("Creating account..."),
            ..FormStatus::default()
        };
        form::render_form(frame, area, "Register", &fields, vec![], &status);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        type_text(&mut form, "ada");
        let update = form.handle_key(key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert!(form.error.is_some());
    }

    #[test]
    fn test_login_submits_credentials() {
        let mut form = LoginForm::open(Some("Registered; please log in".into()));
        type_text(&mut form, " ada ");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "pw");
        let update = form.handle_key(key(KeyCode::Enter));

        assert!(form.submitting);
        assert!(form.notice.is_none());
        match update.effects.as_slice() {
            [UiEffect::Login { credentials, .. }] => {
                assert_eq!(credentials.username, "ada");
                assert_eq!(credentials.password, "pw");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_clears_password() {
        let mut form = LoginForm {
            password: "secret".into(),
            submitting: true,
            ..LoginForm::default()
        };
        form.on_failed("HTTP 401: Invalid credentials".into());
        assert!(form.password.is_empty());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("HTTP 401: Invalid credentials"));
    }

    #[test]
    fn test_register_tab_cycles_fields() {
        let mut form = RegisterForm::default();
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, RegisterField::Email);
        form.handle_key(key(KeyCode::BackTab));
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, RegisterField::Password);
    }

    #[test]
    fn test_register_submits_registration() {
        let mut form = RegisterForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            ..RegisterForm::default()
        };
        let update = form.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::Register { task: None, .. }]
        ));
    }
}
