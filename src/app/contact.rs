use leptos::{ev::SubmitEvent, prelude::*};

use super::content::CONTACT_INFO;
use super::host::use_view_state;
use super::sections::Reveal;
use crate::view_state::{ContactMessage, RevealRule};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-slate-900 border border-slate-700 text-white focus:outline-none focus:border-purple-500";

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_view_state();
    let sent = ctx.contact_sent();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match ctx.submit_contact(draft) {
            Ok(()) => {
                set_error.set(None);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section id="contact" class="py-24 lg:py-32 relative bg-slate-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="contact" rule=RevealRule::amount(0.2)>
                    <div class="text-center mb-12 lg:mb-16">
                        <h2 class="text-4xl lg:text-5xl font-extrabold mb-4 text-slate-100">
                            "Get In Touch"
                        </h2>
                        <p class="text-gray-400 text-lg max-w-3xl mx-auto">
                            "Have a project in mind or just want to say hello? My inbox is open."
                        </p>
                    </div>
                </Reveal>
                <div class="grid lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <Reveal name="contact-info" rule=RevealRule::amount(0.2) class="space-y-6">
                        {CONTACT_INFO
                            .iter()
                            .map(|info| {
                                view! {
                                    <div class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50">
                                        <h3 class="text-lg font-bold mb-1">{info.title}</h3>
                                        <p class="text-gray-400">{info.details}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                    <Reveal name="contact-form" rule=RevealRule::amount(0.2)>
                        <form
                            class="bg-slate-800/60 rounded-xl p-8 border border-slate-700/50 space-y-5"
                            on:submit=on_submit
                        >
                            <input
                                type="text"
                                placeholder="Your Name"
                                class=INPUT_CLASS
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <input
                                type="email"
                                placeholder="Your Email"
                                class=INPUT_CLASS
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <textarea
                                rows="5"
                                placeholder="Your Message"
                                class=INPUT_CLASS
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            />
                            {move || {
                                error
                                    .get()
                                    .map(|e| view! { <p class="text-red-400 text-sm">{e}</p> })
                            }}
                            <Show when=move || sent.get()>
                                <p class="text-green-400 text-sm">
                                    "Thanks! Your message has been sent."
                                </p>
                            </Show>
                            <button
                                type="submit"
                                class="w-full px-8 py-3 font-semibold bg-purple-600 rounded-lg hover:bg-purple-700 transition-colors"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
