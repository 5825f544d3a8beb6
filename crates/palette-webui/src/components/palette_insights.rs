use crate::palette::{ColorSwatch, FamilyDistribution, PaletteInsights};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaletteInsightsPanelProps {
    pub swatches: Vec<ColorSwatch>,
}

#[function_component(PaletteInsightsPanel)]
pub fn palette_insights_panel(PaletteInsightsPanelProps { swatches }: &PaletteInsightsPanelProps) -> Html {
    let insights = PaletteInsights::from_swatches(swatches);
    let distribution = FamilyDistribution::from_swatches(swatches);
    let total = insights.total_colors.max(1);

    html! {
        <section class="palette-insights">
            <h3>{"Palette insights"}</h3>
            <dl class="insights-summary">
                <dt>{"Colors"}</dt>
                <dd>{ insights.total_colors }</dd>
                <dt>{"Warm"}</dt>
                <dd>{ format!("{}%", insights.warm_percentage) }</dd>
                <dt>{"Cool"}</dt>
                <dd>{ format!("{}%", insights.cool_percentage) }</dd>
                <dt>{"Dominant family"}</dt>
                <dd>{ &insights.dominant_family }</dd>
            </dl>
            <div class="family-distribution">
                { for distribution.iter().map(|(family, count)| {
                    let width_pct = count * 100 / total;
                    html! {
                        <div class="family-row" key={family.to_string()}>
                            <span class="family-name">{ family.display_name() }</span>
                            <div class={classes!("family-bar", family.to_string())}
                                style={format!("width: {width_pct}%;")} />
                            <span class="family-count">{ count }</span>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
