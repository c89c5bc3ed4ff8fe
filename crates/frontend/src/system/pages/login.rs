use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{establish_session, use_auth};
use crate::system::auth::{api, ADMIN_EMAIL};

/// Two-step OTP login: request a code for the admin mailbox, then verify it.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (otp, set_otp) = signal(String::new());
    let (otp_sent, set_otp_sent) = signal(false);
    let (sending, set_sending) = signal(false);
    let (verifying, set_verifying) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();

    let send_otp = move || {
        set_sending.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::send_otp().await {
                Ok(_) => {
                    set_otp_sent.set(true);
                }
                Err(e) => {
                    log::error!("Failed to send OTP: {}", e);
                    set_error_message.set(Some("Failed to send OTP. Please try again.".to_string()));
                }
            }
            set_sending.set(false);
        });
    };

    let verify_otp = move || {
        let code = otp.get_untracked();
        if code.trim().is_empty() {
            set_error_message.set(Some("Please enter the OTP".to_string()));
            return;
        }

        set_verifying.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::verify_otp(ADMIN_EMAIL, code.trim()).await {
                Ok(response) if response.is_success() => {
                    establish_session(set_auth_state);
                }
                Ok(_) => {
                    set_error_message.set(Some("Invalid OTP. Please try again.".to_string()));
                }
                Err(e) => {
                    log::error!("Failed to verify OTP: {}", e);
                    set_error_message.set(Some("Verification failed. Please try again.".to_string()));
                }
            }
            set_verifying.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if otp_sent.get_untracked() {
            verify_otp();
        } else {
            send_otp();
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__icon">{icon("shield")}</div>
                <h1>"Admin Login"</h1>
                <p class="login-box__hint">
                    {move || {
                        if otp_sent.get() {
                            format!("Enter the OTP sent to {}", ADMIN_EMAIL)
                        } else {
                            "Request a one-time password to continue".to_string()
                        }
                    }}
                </p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || otp_sent.get()>
                        <div class="form-group">
                            <label for="otp">"One-time password"</label>
                            <input
                                type="text"
                                id="otp"
                                placeholder="Enter OTP"
                                prop:value=move || otp.get()
                                on:input=move |ev| set_otp.set(event_target_value(&ev))
                                disabled=move || verifying.get()
                            />
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || sending.get() || verifying.get()
                    >
                        {move || {
                            if sending.get() {
                                "Sending OTP..."
                            } else if verifying.get() {
                                "Verifying..."
                            } else if otp_sent.get() {
                                "Verify and sign in"
                            } else {
                                "Send OTP"
                            }
                        }}
                    </button>
                </form>

                <Show when=move || otp_sent.get()>
                    <button
                        class="btn-link"
                        on:click=move |_| send_otp()
                        disabled=move || sending.get()
                    >
                        {icon("send")}
                        "Resend OTP"
                    </button>
                </Show>
            </div>
        </div>
    }
}
