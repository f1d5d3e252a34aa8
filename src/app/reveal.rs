use leptos::{html, prelude::*};

use crate::reveal::{RevealId, RevealOptions, RevealRegistry};

#[cfg(feature = "hydrate")]
use crate::reveal::{Transition, REVEAL_ID_ATTR};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(feature = "hydrate")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Registry = RevealRegistry<WriteSignal<bool>>;

/// The one `IntersectionObserver` for a page plus the closure it calls back
/// into. The closure must outlive the observer, so they are kept together.
#[cfg(feature = "hydrate")]
struct BrowserObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Page-scoped scroll reveal controller, shared with every [`Reveal`] through context.
#[derive(Clone, Copy)]
pub struct RevealController {
    registry: StoredValue<Registry>,
    #[cfg(feature = "hydrate")]
    observer: StoredValue<Option<BrowserObserver>, LocalStorage>,
}

/// Creates the controller for the current page and tears it down with the
/// page's owner.
pub fn provide_reveal_controller(options: RevealOptions) -> RevealController {
    let registry = StoredValue::new(Registry::new());

    #[cfg(feature = "hydrate")]
    let controller = RevealController {
        registry,
        observer: StoredValue::new_local(create_observer(registry, &options)),
    };
    #[cfg(not(feature = "hydrate"))]
    let controller = {
        let _ = options;
        RevealController { registry }
    };

    on_cleanup(move || controller.teardown());
    provide_context(controller);
    controller
}

impl RevealController {
    fn register(&self, set_revealed: WriteSignal<bool>) -> Option<RevealId> {
        self.registry
            .try_update_value(|registry| registry.register(set_revealed))
    }

    #[cfg(feature = "hydrate")]
    fn apply(transition: Option<Transition<WriteSignal<bool>>>, id: RevealId) -> bool {
        match transition {
            Some(Transition::Revealed(set_revealed)) => {
                log::debug!("revealed element {}", id.as_attr());
                set_revealed.set(true);
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "hydrate")]
    fn observe(&self, id: RevealId, el: &web_sys::Element) {
        if let Err(e) = el.set_attribute(REVEAL_ID_ATTR, &id.as_attr()) {
            log::warn!("couldn't tag reveal element: {e:?}");
        }
        let observed = self
            .observer
            .try_with_value(|observer| {
                observer
                    .as_ref()
                    .map(|o| o.observer.observe(el))
                    .is_some()
            })
            .unwrap_or(false);
        if !observed {
            let transition = self
                .registry
                .try_update_value(|registry| registry.force_reveal(id));
            Self::apply(transition, id);
        }
    }

    pub fn pending(&self) -> usize {
        self.registry
            .try_with_value(|registry| registry.pending())
            .unwrap_or(0)
    }

    fn teardown(&self) {
        #[cfg(feature = "hydrate")]
        self.observer.try_with_value(|observer| {
            if let Some(o) = observer {
                o.observer.disconnect();
            }
        });
        self.registry.try_update_value(|registry| registry.teardown());
    }
}

#[cfg(feature = "hydrate")]
fn create_observer(
    registry: StoredValue<Registry>,
    options: &RevealOptions,
) -> Option<BrowserObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| RevealId::from_attr(&v))
                else {
                    continue;
                };
                let visible = entry.is_intersecting();
                let transition =
                    registry.try_update_value(|registry| registry.on_intersection(id, visible));
                if RevealController::apply(transition, id) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => Some(BrowserObserver {
            observer,
            _callback: callback,
        }),
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {e:?}");
            None
        }
    }
}

/// Wraps content that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let controller = expect_context::<RevealController>();
    let (revealed, set_revealed) = signal(false);
    let node_ref = NodeRef::<html::Div>::new();
    let id = controller.register(set_revealed);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let (Some(el), Some(id)) = (node_ref.get(), id) {
            controller.observe(id, &el);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if revealed.get() {
                    format!("animate-on-scroll fade-in-up {class}")
                } else {
                    format!("animate-on-scroll {class}")
                }
            }
        >
            {children()}
        </div>
    }
}
