use crate::view_model::TicketView;
use yew::{html, Component, Context, Html, Properties};

pub struct TicketCard {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub ticket: TicketView,
}

impl Component for TicketCard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ticket = &ctx.props().ticket;

        html! {
            <div class="card ticket-card">
                <div class="card-content">
                    <div class="columns is-vcentered">
                        <div class="column is-one-third has-text-centered">
                            <figure class="image"><img src={ticket.logo_url.clone()} alt={ticket.carrier.clone()}/></figure>
                            // purchasing is not wired up
                            <button class="button is-warning is-fullwidth">{format!("Купить за {}", ticket.price)}</button>
                        </div>
                        <div class="column">
                            <p class="title is-4">{&ticket.departure.time}</p>
                            <p>{format!("{}, {}", ticket.departure.code, ticket.departure.name)}</p>
                            <p class="has-text-grey">{&ticket.departure.date}</p>
                        </div>
                        <div class="column has-text-centered">
                            <p class="is-size-7 has-text-grey">{&ticket.stops}</p>
                        </div>
                        <div class="column has-text-right">
                            <p class="title is-4">{&ticket.arrival.time}</p>
                            <p>{format!("{}, {}", ticket.arrival.name, ticket.arrival.code)}</p>
                            <p class="has-text-grey">{&ticket.arrival.date}</p>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
