/// Options page: one checkbox for case-sensitive matching, a save button,
/// and a status line that confirms the save for a moment.
use std::rc::Rc;
use std::time::Duration;

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::platform::{Localization, PreferenceStore};
use crate::prefs;

/// How long the "saved" notice stays up.
const STATUS_CLEAR_MS: u64 = 1_000;

/// Locale strings the page needs, fetched once at initialization.
struct OptionsText {
    case_label: String,
    save_button: String,
    save_complete: String,
}

impl OptionsText {
    fn resolve(i18n: &dyn Localization) -> OptionsText {
        OptionsText {
            case_label: i18n.message("caseSensitiveInstruction"),
            save_button: i18n.message("saveButtonText"),
            save_complete: i18n.message("saveComplete"),
        }
    }
}

/// Checkbox and status-line state, kept free of DOM and framework types.
///
/// The status line is written on save and cleared when a clear fires; every
/// save schedules its own clear and none of them is ever cancelled, so rapid
/// saves end in several idempotent writes of the empty string.
pub struct OptionsState {
    case_sensitive: bool,
    status: String,
}

impl OptionsState {
    pub fn load(store: &dyn PreferenceStore) -> OptionsState {
        OptionsState {
            case_sensitive: prefs::load_case_flag(store),
            status: String::new(),
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Persist the checkbox state and put up the saved notice.
    pub fn save(&mut self, store: &dyn PreferenceStore, saved_notice: &str) {
        prefs::save_case_flag(store, self.case_sensitive);
        self.status = saved_notice.to_owned();
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

pub enum OptionsMsg {
    CaseToggled(bool),
    Save,
    ClearStatus,
}

#[derive(Properties)]
pub struct OptionsProps {
    pub prefs: Rc<dyn PreferenceStore>,
    pub i18n: Rc<dyn Localization>,
}

impl PartialEq for OptionsProps {
    fn eq(&self, other: &OptionsProps) -> bool {
        Rc::ptr_eq(&self.prefs, &other.prefs) && Rc::ptr_eq(&self.i18n, &other.i18n)
    }
}

pub struct OptionsView {
    state: OptionsState,
    text: OptionsText,
}

impl Component for OptionsView {
    type Message = OptionsMsg;
    type Properties = OptionsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        OptionsView {
            state: OptionsState::load(props.prefs.as_ref()),
            text: OptionsText::resolve(props.i18n.as_ref()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            OptionsMsg::CaseToggled(case_sensitive) => {
                self.state.set_case_sensitive(case_sensitive);
                true
            }
            OptionsMsg::Save => {
                self.state
                    .save(ctx.props().prefs.as_ref(), &self.text.save_complete);
                // The clear is never cancelled; rapid saves just clear twice.
                ctx.link().send_future(async {
                    sleep(Duration::from_millis(STATUS_CLEAR_MS)).await;
                    OptionsMsg::ClearStatus
                });
                true
            }
            OptionsMsg::ClearStatus => {
                self.state.clear_status();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let toggled = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            OptionsMsg::CaseToggled(input.checked())
        });

        html! {
            <div class="tabfinder-options">
                <label class="case-option">
                    <input
                        type="checkbox"
                        checked={self.state.case_sensitive()}
                        onchange={toggled}
                    />
                    { self.text.case_label.clone() }
                </label>
                <Button onclick={link.callback(|_| OptionsMsg::Save)} variant={ButtonVariant::Primary}>
                    { self.text.save_button.clone() }
                </Button>
                <div class="options-status">{ self.state.status().to_string() }</div>
            </div>
        }
    }
}
