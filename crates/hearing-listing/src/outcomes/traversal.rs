use super::domain::{
    CourtApplication, CourtApplicationCase, CourtOrder, Hearing, JudicialResult, Offence,
};

/// Anything in a resulted hearing that can carry judicial results.
#[derive(Debug, Clone, Copy)]
pub enum ResultBearingNode<'a> {
    Offence(&'a Offence),
    Application(&'a CourtApplication),
    NestedOrder(&'a CourtOrder),
    NestedCaseLink(&'a CourtApplicationCase),
}

impl<'a> ResultBearingNode<'a> {
    /// Results in recorded order; absent collections read as empty.
    pub fn judicial_results(&self) -> &'a [JudicialResult] {
        let results = match *self {
            ResultBearingNode::Offence(offence) => &offence.judicial_results,
            ResultBearingNode::Application(application) => &application.judicial_results,
            ResultBearingNode::NestedOrder(order) => &order.judicial_results,
            ResultBearingNode::NestedCaseLink(link) => &link.judicial_results,
        };
        results.as_deref().unwrap_or_default()
    }
}

pub fn offences(hearing: &Hearing) -> impl Iterator<Item = &Offence> {
    hearing
        .prosecution_cases
        .iter()
        .flatten()
        .flat_map(|case| case.defendants.iter())
        .flat_map(|defendant| defendant.offences.iter())
}

pub fn applications(hearing: &Hearing) -> impl Iterator<Item = &CourtApplication> {
    hearing.court_applications.iter().flatten()
}

/// Orders and case links hanging off a single application.
pub fn nested_nodes(application: &CourtApplication) -> impl Iterator<Item = ResultBearingNode<'_>> {
    let orders = application
        .court_orders
        .iter()
        .flatten()
        .map(ResultBearingNode::NestedOrder);
    let links = application
        .court_application_cases
        .iter()
        .flatten()
        .map(ResultBearingNode::NestedCaseLink);
    orders.chain(links)
}

/// Every result-bearing node: offences, then applications, then nested orders and case links.
pub fn result_bearing_nodes(hearing: &Hearing) -> impl Iterator<Item = ResultBearingNode<'_>> {
    offences(hearing)
        .map(ResultBearingNode::Offence)
        .chain(applications(hearing).map(ResultBearingNode::Application))
        .chain(applications(hearing).flat_map(nested_nodes))
}

pub fn judicial_results(hearing: &Hearing) -> impl Iterator<Item = &JudicialResult> {
    result_bearing_nodes(hearing).flat_map(|node| node.judicial_results().iter())
}
