//! Plain-text rendering of the three screens.

use crate::bmi::{BmiCategory, BmiResult};
use crate::person::{GenderSelection, StoredPerson, ABSENT_TEXT};
use crate::ui::form::{FormField, FormState};
use crate::ui::profile::ProfileState;

pub const HOME_TITLE: &str = "Formularz";
pub const PROFILE_TITLE: &str = "Dane Użytkownika";
pub const BMI_TITLE: &str = "BMI";

const LOADING_LINE: &str = "Ładowanie...";

pub fn render_home(form: &FormState) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", HOME_TITLE), "Podaj dane...".to_string()];
    for field in FormField::all() {
        lines.push(format!("{}: {}", field.label(), form.value(*field)));
    }

    let radio: Vec<String> = [
        GenderSelection::Male,
        GenderSelection::Female,
        GenderSelection::Other,
    ]
    .iter()
    .map(|option| {
        let mark = if *option == form.gender { "(x)" } else { "( )" };
        format!("{} {}", mark, option.label())
    })
    .collect();
    lines.push(format!("Wybierz płeć: {}", radio.join("  ")));

    let nav = if form.navigation_enabled() {
        "[Dane] [Zapisz] [BMI]"
    } else {
        "[Dane: nieaktywne] [Zapisz] [BMI: nieaktywne]"
    };
    lines.push(nav.to_string());
    lines
}

/// Profile card, or the loading/error line that replaces it.
pub fn render_profile(state: &ProfileState, person: &StoredPerson) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", PROFILE_TITLE)];
    match state {
        ProfileState::Idle | ProfileState::Loading { .. } => lines.push(LOADING_LINE.to_string()),
        ProfileState::Failed { message, .. } => lines.push(message.clone()),
        ProfileState::Loaded { inference, .. } => {
            lines.push(format!("Imię: {}", person.name));
            lines.push(format!("Nazwisko: {}", person.surname));
            lines.push(format!("Wiek: {}", or_absent(person.age())));
            lines.push(format!("Wzrost: {}", or_absent(person.height_cm())));
            lines.push(format!("Waga: {}", or_absent(person.weight_kg())));
            lines.push(format!("Płeć: {}", inference.gender.label()));
        }
    }
    lines
}

pub fn bmi_message(name: &str, bmi: &BmiResult) -> String {
    match bmi.category {
        BmiCategory::BelowNormal => format!(
            "Hej {}, jesteś poniżej normy. Twoje BMI wynosi {:.2}.",
            name, bmi.value
        ),
        BmiCategory::Normal => format!(
            "Hej {}, jesteś w świetnej formie! Twoje BMI wynosi {:.2}.",
            name, bmi.value
        ),
        BmiCategory::AboveNormal => format!(
            "Hej {}, Twoje BMI wynosi {:.2}, warto zadbać o zdrowie!",
            name, bmi.value
        ),
        BmiCategory::Undetermined => "Nie można obliczyć BMI. Sprawdź swoje dane.".to_string(),
    }
}

pub fn render_bmi(name: &str, bmi: &BmiResult) -> Vec<String> {
    vec![format!("== {} ==", BMI_TITLE), bmi_message(name, bmi)]
}

fn or_absent(value: Option<i32>) -> String {
    value.map_or_else(|| ABSENT_TEXT.to_string(), |v| v.to_string())
}
