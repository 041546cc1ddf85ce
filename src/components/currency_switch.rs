use crate::objects::Currency;
use yew::{html, Callback, Component, Context, Html, Properties};

pub struct CurrencySwitch {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub selected: Currency,
    pub onchange: Callback<Currency>,
}

impl Component for CurrencySwitch {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let selected = ctx.props().selected;

        html! {
            <div class="buttons has-addons">
                { Currency::ALL.iter().map(|&currency| {
                    let class = match currency == selected {
                        true => "button is-primary is-selected",
                        false => "button",
                    };
                    html! {
                        <button class={class} onclick={ctx.props().onchange.reform(move |_| currency)}>{currency.code()}</button>
                    }
                }).collect::<Html>() }
            </div>
        }
    }
}
