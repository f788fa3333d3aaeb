use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum DropdownAlign {
    Left,
    #[default]
    Right,
}

#[derive(Properties, PartialEq)]
pub struct FilterButtonProps {
    #[prop_or_default]
    pub align: DropdownAlign,
    #[prop_or(vec!["Active", "Banned"])]
    pub options: Vec<&'static str>,
}

/// Filter dropdown for the page header.
/// It only tracks its own open state; the choices are not reported anywhere.
#[function_component]
pub fn FilterButton(props: &FilterButtonProps) -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| open.set(false));
    }

    let toggle_cb = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };
    let close_cb = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(false);
        })
    };

    let side = match props.align {
        DropdownAlign::Left => "left-0",
        DropdownAlign::Right => "right-0",
    };

    html! {
        <div class="relative inline-flex" ref={node}>
            <button class="btn px-2.5 bg-white dark:bg-gray-800 border-gray-200 hover:border-gray-300 text-gray-400" aria-haspopup="true" aria-expanded={open.to_string()} onclick={toggle_cb}>
                <span class="sr-only">{"Filter"}</span>
                {"⏷"}
            </button>
            if *open {
                <div class={classes!("origin-top-right", "z-10", "absolute", "top-full", "min-w-56", "bg-white", "dark:bg-gray-800", "border", "border-gray-200", "pt-1.5", "rounded-lg", "shadow-lg", "mt-1", side)}>
                    <div class="text-xs font-semibold text-gray-400 uppercase pt-1.5 pb-2 px-3">{"Filters"}</div>
                    <ul class="mb-4">
                        { for props.options.iter().map(|option| html! {
                            <li class="py-1 px-3">
                                <label class="flex items-center">
                                    <input type="checkbox" class="form-checkbox" />
                                    <span class="text-sm font-medium ml-2">{*option}</span>
                                </label>
                            </li>
                        }) }
                    </ul>
                    <div class="py-2 px-3 border-t border-gray-200 bg-gray-50 dark:bg-gray-700/20">
                        <ul class="flex items-center justify-between">
                            <li><button class="btn-xs bg-white border-gray-200 text-red-500">{"Clear"}</button></li>
                            <li><button class="btn-xs bg-violet-500 text-white" onclick={close_cb}>{"Apply"}</button></li>
                        </ul>
                    </div>
                </div>
            }
        </div>
    }
}
