//! Session controller tying form, store, navigation and screens together.
//!
//! Reducers stay pure; this is where validation outcomes turn into store
//! writes and where navigation starts or stops the profile lookup.

use crate::bmi::BmiResult;
use crate::genderize::GenderizeClient;
use crate::person::{GenderSelection, PersonRepository, StoredPerson};
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route};
use crate::ui::notice::Notice;
use crate::ui::profile::{ProfileScreen, ProfileState};
use crate::ui::view;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Opened,
    /// Action disabled: a form field is empty, or not on the home screen.
    Disabled,
    /// No save yet in this session.
    SaveRequired,
}

pub struct App {
    form: FormState,
    navigator: Navigator,
    repository: PersonRepository,
    profile: ProfileScreen,
}

impl App {
    pub fn new(repository: PersonRepository, client: GenderizeClient) -> Self {
        Self {
            form: FormState::default(),
            navigator: Navigator::new(),
            repository,
            profile: ProfileScreen::new(client),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn profile_state(&self) -> &ProfileState {
        self.profile.state()
    }

    pub fn edit(&mut self, field: FormField, value: &str) {
        dispatch_mvi!(
            self,
            form,
            FormReducer,
            FormIntent::Edit {
                field,
                value: value.to_string(),
            }
        );
    }

    pub fn select_gender(&mut self, gender: GenderSelection) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::SelectGender(gender));
    }

    /// Validate and, on success, overwrite the stored record.
    pub fn save(&mut self) -> Option<&Notice> {
        let intent = match self.form.validate() {
            Err(error) => FormIntent::SaveRejected(error),
            Ok(record) => match self.repository.save(&record) {
                Ok(()) => FormIntent::SaveAccepted,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to save person record");
                    FormIntent::SaveFailed {
                        reason: err.to_string(),
                    }
                }
            },
        };
        dispatch_mvi!(self, form, FormReducer, intent);
        self.form.notice.as_ref()
    }

    /// Open the profile screen and start its gender lookup.
    /// Must be called from within a tokio runtime.
    pub fn open_profile(&mut self) -> NavOutcome {
        let outcome = self.check_navigation();
        if outcome == NavOutcome::Opened {
            let name = self.form.name.clone();
            self.navigator.navigate(Route::Profile {
                name: name.clone(),
                surname: self.form.surname.clone(),
            });
            self.profile.activate(&name);
        }
        outcome
    }

    pub fn open_bmi(&mut self) -> NavOutcome {
        let outcome = self.check_navigation();
        if outcome == NavOutcome::Opened {
            self.navigator.navigate(Route::Bmi {
                name: self.form.name.clone(),
                surname: self.form.surname.clone(),
            });
        }
        outcome
    }

    /// Pop the current screen. Leaving the profile screen aborts its lookup.
    pub fn back(&mut self) -> bool {
        match self.navigator.back() {
            Some(Route::Profile { .. }) => {
                self.profile.close();
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Take the pending notice, clearing it from the form.
    pub fn take_notice(&mut self) -> Option<Notice> {
        let notice = self.form.notice.clone();
        if notice.is_some() {
            dispatch_mvi!(self, form, FormReducer, FormIntent::DismissNotice);
        }
        notice
    }

    /// Wait until the profile lookup settles. Pending forever if none is
    /// in flight, so callers race it against input.
    pub async fn next_profile_update(&mut self) {
        self.profile.next_update().await;
    }

    /// Apply lookup results that already arrived.
    pub fn poll_profile(&mut self) -> bool {
        self.profile.poll()
    }

    pub fn stored_person(&self) -> StoredPerson {
        self.repository.load()
    }

    /// Text of the current screen.
    pub fn render(&self) -> Vec<String> {
        match self.navigator.current() {
            Route::Home => view::render_home(&self.form),
            Route::Profile { .. } => view::render_profile(self.profile.state(), &self.stored_person()),
            Route::Bmi { name, .. } => {
                let bmi = BmiResult::for_person(&self.stored_person());
                view::render_bmi(name, &bmi)
            }
        }
    }

    fn check_navigation(&mut self) -> NavOutcome {
        if *self.navigator.current() != Route::Home || !self.form.navigation_enabled() {
            return NavOutcome::Disabled;
        }
        if !self.form.data_saved {
            dispatch_mvi!(self, form, FormReducer, FormIntent::NavigationRefused);
            return NavOutcome::SaveRequired;
        }
        NavOutcome::Opened
    }
}
