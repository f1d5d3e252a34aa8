use leptos::{html, prelude::*};

use crate::contact::{ContactLink, ContactMessage};

#[component]
pub fn ContactSection(contacts: Vec<ContactLink>) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h3 class="font-heading text-2xl mb-4">"Get In Touch"</h3>
                <p class="text-muted-foreground mb-6">
                    "I'm always interested in discussing new opportunities in cloud computing, cybersecurity, and technical support roles. Let's connect!"
                </p>
            </div>
            <div class="grid md:grid-cols-2 gap-4">
                {contacts
                    .into_iter()
                    .map(|contact| view! { <ContactCard contact=contact /> })
                    .collect_view()}
            </div>
            <ContactForm />
        </div>
    }
}

#[component]
fn ContactCard(contact: ContactLink) -> impl IntoView {
    let external = contact.is_external();
    view! {
        <a
            href=contact.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="glow-hover group flex items-center p-4 rounded-lg bg-card/30 backdrop-blur-sm border border-border hover:border-accent transition-all duration-300"
        >
            <div class="p-2 rounded-full bg-space-dark border border-accent/20 group-hover:border-accent transition-colors duration-300 mr-4">
                <i class=format!("{} text-accent", contact.kind.icon_class())></i>
            </div>
            <div>
                <p class="font-semibold">{contact.kind.label()}</p>
                <p class="text-muted-foreground text-sm">{contact.value}</p>
            </div>
        </a>
    }
}

/// Collects a message and confirms it locally. Nothing is sent anywhere.
#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (confirmation, set_confirmation) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = ContactMessage {
            name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            email: email_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        log::info!("contact form submitted locally ({} chars)", message.message.len());
        set_confirmation.set(Some(message.confirmation()));

        if let Some(el) = name_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = email_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    view! {
        <form class="space-y-4 p-6 rounded-lg bg-card/30 border border-border" on:submit=on_submit>
            <div class="grid md:grid-cols-2 gap-4">
                <input
                    node_ref=name_ref
                    type="text"
                    name="name"
                    placeholder="Your name"
                    class="w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-accent"
                />
                <input
                    node_ref=email_ref
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    class="w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-accent"
                />
            </div>
            <textarea
                node_ref=message_ref
                name="message"
                rows="4"
                placeholder="What would you like to talk about?"
                class="w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-accent"
            ></textarea>
            <button
                type="submit"
                class="glow-hover px-6 py-2 rounded-md bg-accent text-accent-foreground hover:bg-accent/90"
            >
                "Send Message"
            </button>
            {move || {
                confirmation
                    .get()
                    .map(|text| {
                        view! {
                            <p class="contact-confirmation text-sm text-accent" role="status">
                                {text}
                            </p>
                        }
                    })
            }}
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::ContactKind;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_contact_links_target() {
        let owner = Owner::new();
        owner.with(|| {
            let contacts = vec![
                ContactLink {
                    kind: ContactKind::Email,
                    value: "me@example.com".to_string(),
                    href: "mailto:me@example.com".to_string(),
                },
                ContactLink {
                    kind: ContactKind::Github,
                    value: "View Projects".to_string(),
                    href: "https://github.com/me".to_string(),
                },
            ];
            let html = view! { <ContactSection contacts=contacts /> }.to_html();
            assert_eq!(html.matches(r#"target="_blank""#).count(), 1);
            assert!(html.contains("mailto:me@example.com"));
            assert!(html.contains("GitHub"));
            assert!(!html.contains("contact-confirmation"));
        });
    }
}
