use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::aria::{AriaOverrides, AriaState, LOADING_TEXT};
use crate::click::ClickGate;
use crate::props::{check_content, ButtonSize, ButtonState, ButtonType, ButtonVariant};
use crate::styling::{ButtonClasses, ColorVars};

/// Button with variants, sizes, a loading state and derived ARIA attributes.
///
/// `label` is the text content and the source of the loading announcement.
/// Rich `children`, when given, replace the label visually only.
///
/// Generated attributes a caller may want to replace have their own props:
/// `button_type`, `tabindex` and `aria_label` win over the derived values.
/// Other attributes given on the component (`attr:data-*`, `attr:id`,
/// `on:*`) are forwarded to the `<button>` untouched.
///
/// ```rust,ignore
/// view! {
///     <Button label="Submit Order" variant=ButtonVariant::Success loading=pending/>
/// }
/// ```
#[component]
pub fn Button(
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] children: Option<ChildrenFn>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] button_type: Signal<ButtonType>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] full_width: Signal<bool>,
    #[prop(optional, into)] size: Signal<ButtonSize>,
    #[prop(optional, into)] variant: Signal<ButtonVariant>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] tabindex: MaybeProp<String>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
) -> impl IntoView {
    let _ = label.with_untracked(|l| check_content(l, children.is_some()));

    let model = ButtonModel::new(ButtonInputs {
        label,
        button_type,
        disabled,
        loading,
        full_width,
        size,
        variant,
        class,
        tabindex,
        aria_label,
    });
    let ButtonModel {
        state,
        classes,
        aria,
        style,
    } = model;

    // Built once; reads on_click, disabled and loading at click time.
    let handle_click = move |ev: MouseEvent| {
        let gate = ClickGate::new(disabled.get_untracked(), loading.get_untracked());
        gate.dispatch(ev, on_click.map(|cb| move |ev| cb.run(ev)));
    };

    let content = move || {
        if state.get().loading {
            view! {
                <span class="btn-spinner" aria-hidden="true"></span>
                <span class="visually-hidden">{LOADING_TEXT}</span>
            }
            .into_any()
        } else if let Some(children) = children.as_ref() {
            children()
        } else {
            label.get().into_any()
        }
    };

    view! {
        <button
            type=move || state.get().button_type.as_str()
            class=move || classes.get()
            style=move || style.get()
            disabled=move || state.get().disabled
            tabindex=move || aria.get().tabindex
            aria-disabled=move || aria.get().aria_disabled()
            aria-busy=move || aria.get().aria_busy()
            aria-label=move || aria.get().label
            on:click=handle_click
        >
            {content}
        </button>
    }
}

#[derive(Default)]
struct ButtonInputs {
    label: Signal<String>,
    button_type: Signal<ButtonType>,
    disabled: Signal<bool>,
    loading: Signal<bool>,
    full_width: Signal<bool>,
    size: Signal<ButtonSize>,
    variant: Signal<ButtonVariant>,
    class: MaybeProp<String>,
    tabindex: MaybeProp<String>,
    aria_label: MaybeProp<String>,
}

/// Derived values of one button. Memos only notify when the derived value
/// changes, so parent updates with equal props leave the DOM untouched.
#[derive(Clone, Copy)]
struct ButtonModel {
    state: Memo<ButtonState>,
    classes: Memo<String>,
    aria: Memo<AriaState>,
    style: Memo<String>,
}

impl ButtonModel {
    fn new(inputs: ButtonInputs) -> Self {
        let ButtonInputs {
            label,
            button_type,
            disabled,
            loading,
            full_width,
            size,
            variant,
            class,
            tabindex,
            aria_label,
        } = inputs;

        let state = Memo::new(move |_| ButtonState {
            button_type: button_type.get(),
            disabled: disabled.get(),
            loading: loading.get(),
            full_width: full_width.get(),
            size: size.get(),
            variant: variant.get(),
        });
        let classes = Memo::new(move |_| {
            ButtonClasses::derive(&state.get(), class.get().as_deref()).to_string()
        });
        let aria = Memo::new(move |_| {
            let overrides = AriaOverrides {
                tabindex: tabindex.get(),
                label: aria_label.get(),
            };
            label.with(|l| AriaState::derive_with(&state.get(), l, &overrides))
        });
        let style = Memo::new(move |_| ColorVars::for_variant(state.get().variant).to_style());

        Self {
            state,
            classes,
            aria,
            style,
        }
    }
}
