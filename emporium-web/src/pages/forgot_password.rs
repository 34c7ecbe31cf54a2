use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

const SECURITY_QUESTIONS: &[&str] = &[
    "What is your favorite color?",
    "What is your mother's maiden name?",
    "What city were you born in?",
    "What was the name of your first pet?",
];

/// Loose email shape check; the backend remains the authority.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !local.contains(char::is_whitespace)
        && !domain.contains(char::is_whitespace)
        && domain.split_once('.').is_some_and(|(host, tld)| {
            !host.is_empty() && !tld.is_empty()
        })
}

/// 8+ characters with at least one lower, upper, digit, and symbol.
fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(char::is_lowercase)
        && value.chars().any(char::is_uppercase)
        && value.chars().any(|ch| ch.is_ascii_digit())
        && value.chars().any(|ch| !ch.is_alphanumeric())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Verify,
    Reset,
}

/// Password recovery is not wired to the backend yet; the page walks
/// the verify/reset steps locally and lands on the login page.
#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let phase = use_state(|| Phase::Verify);
    let email = use_state(String::new);
    let question = use_state(String::new);
    let answer = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let navigator = use_navigator();

    let can_verify =
        looks_like_email(&email) && !(*question).is_empty() && !(*answer).trim().is_empty();
    let strong = is_strong_password(&password);
    let matches = !(*password).is_empty() && *password == *confirm;

    let on_verify = {
        let phase = phase.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            phase.set(Phase::Reset);
        })
    };

    let on_reset = {
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    let on_back = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(Phase::Verify))
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_question_change = {
        let question = question.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                question.set(select.value());
            }
        })
    };

    let password_hint = if (*password).is_empty() {
        "Min 8 chars, 1 upper, 1 lower, 1 number, 1 symbol."
    } else if strong {
        "Password meets complexity requirements."
    } else {
        "Password does not meet complexity requirements."
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Forgot your password?"}</h2>
                    <p class="text-sm text-base-content/70">
                        {"Enter the email you use to sign in and your recovery information."}
                    </p>
                    {
                        match *phase {
                            Phase::Verify => html! {
                                <form onsubmit={on_verify}>
                                    <div class="form-control">
                                        <label class="label" for="email">
                                            <span class="label-text">{"Email"}</span>
                                        </label>
                                        <input
                                            id="email"
                                            class="input input-bordered"
                                            type="email"
                                            value={(*email).clone()}
                                            oninput={text_input(&email)}
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="question">
                                            <span class="label-text">{"Security question"}</span>
                                        </label>
                                        <select
                                            id="question"
                                            class="select select-bordered"
                                            onchange={on_question_change}
                                        >
                                            <option value="" selected={(*question).is_empty()} disabled=true>
                                                {"Select your question"}
                                            </option>
                                            { for SECURITY_QUESTIONS.iter().map(|candidate| html! {
                                                <option
                                                    value={*candidate}
                                                    selected={*question == *candidate}
                                                >
                                                    { *candidate }
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="answer">
                                            <span class="label-text">{"Answer"}</span>
                                        </label>
                                        <input
                                            id="answer"
                                            class="input input-bordered"
                                            type="text"
                                            value={(*answer).clone()}
                                            oninput={text_input(&answer)}
                                        />
                                    </div>
                                    <div class="form-control mt-6">
                                        <button class="btn btn-primary" type="submit" disabled={!can_verify}>
                                            {"Continue"}
                                        </button>
                                    </div>
                                    <div class="text-center text-sm mt-2">
                                        <Link<MainRoute> to={MainRoute::Login} classes="link">
                                            {"Back to sign in"}
                                        </Link<MainRoute>>
                                    </div>
                                </form>
                            },
                            Phase::Reset => html! {
                                <form onsubmit={on_reset}>
                                    <div class="alert alert-success text-sm">
                                        <span>{ format!("Security question verified for {}. Set your new password.", email.trim()) }</span>
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="new-password">
                                            <span class="label-text">{"New password"}</span>
                                        </label>
                                        <input
                                            id="new-password"
                                            class="input input-bordered"
                                            type="password"
                                            value={(*password).clone()}
                                            oninput={text_input(&password)}
                                        />
                                        <span class={classes!("label-text-alt", "mt-1", strong.then_some("text-success"))}>
                                            { password_hint }
                                        </span>
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="confirm-password">
                                            <span class="label-text">{"Confirm new password"}</span>
                                        </label>
                                        <input
                                            id="confirm-password"
                                            class="input input-bordered"
                                            type="password"
                                            value={(*confirm).clone()}
                                            oninput={text_input(&confirm)}
                                        />
                                        if !matches && !(*confirm).is_empty() {
                                            <span class="label-text-alt text-error mt-1">
                                                {"Passwords do not match."}
                                            </span>
                                        }
                                    </div>
                                    <div class="form-control mt-6">
                                        <button class="btn btn-primary" type="submit" disabled={!(strong && matches)}>
                                            {"Reset"}
                                        </button>
                                    </div>
                                    <div class="text-center text-sm mt-2">
                                        <button type="button" class="link" onclick={on_back}>{"Back"}</button>
                                    </div>
                                </form>
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  ada@example.com  "));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("ada@"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("a da@example.com"));
    }

    #[test]
    fn password_strength_requires_all_classes() {
        assert!(is_strong_password("Str0ng!pw"));
        assert!(!is_strong_password("short1!"));
        assert!(!is_strong_password("alllower1!"));
        assert!(!is_strong_password("ALLUPPER1!"));
        assert!(!is_strong_password("NoDigits!!"));
        assert!(!is_strong_password("NoSymbol11"));
    }
}
