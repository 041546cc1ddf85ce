use crate::objects::{StopFilter, StopToggle, MAX_STOPS};
use crate::view_model::stops_label;
use yew::{html, Callback, Component, Context, Html, Properties};

pub struct StopFilterPanel {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub filter: StopFilter,
    pub ontoggle: Callback<StopToggle>,
}

impl StopFilterPanel {
    fn view_checkbox(
        &self,
        ctx: &Context<Self>,
        label: String,
        checked: bool,
        toggle: StopToggle,
    ) -> Html {
        html! {
            <label class="checkbox panel-block">
                <input type="checkbox" checked={checked} onchange={ctx.props().ontoggle.reform(move |_| toggle)}/>
                {label}
            </label>
        }
    }
}

impl Component for StopFilterPanel {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let filter = &ctx.props().filter;

        html! {
            <>
                <p class="panel-heading">{"Количество пересадок"}</p>
                { self.view_checkbox(ctx, "Все".into(), filter.is_all_selected(), StopToggle::All) }
                { (0..=MAX_STOPS).map(|stops| {
                    self.view_checkbox(ctx, stops_label(stops), filter.is_selected(stops), StopToggle::Stops(stops))
                }).collect::<Html>() }
            </>
        }
    }
}
