use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

use super::super::domain::Hearing;
use super::super::traversal::ResultBearingNode;
use super::assignment::{assign, ListingAssignment};

/// Location of an offence inside the hearing's case tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct OffencePosition {
    pub case: usize,
    pub defendant: usize,
    pub offence: usize,
}

/// Offences and applications grouped under one listing type.
#[derive(Debug)]
pub(crate) struct ListingBundle {
    pub type_id: Uuid,
    pub description: String,
    stand_alone_case: bool,
    pub offences: BTreeSet<OffencePosition>,
    pub applications: BTreeSet<usize>,
}

impl ListingBundle {
    fn new(assignment: &ListingAssignment<'_>) -> Self {
        Self {
            type_id: assignment.type_id,
            description: assignment.description(),
            stand_alone_case: assignment.stand_alone_case,
            offences: BTreeSet::new(),
            applications: BTreeSet::new(),
        }
    }

    fn absorb_label(&mut self, assignment: &ListingAssignment<'_>) {
        if !self.stand_alone_case && assignment.stand_alone_case {
            self.description = assignment.description();
            self.stand_alone_case = true;
        }
    }
}

#[derive(Debug, Default)]
struct BundleSet {
    bundles: Vec<ListingBundle>,
    index: HashMap<Uuid, usize>,
}

impl BundleSet {
    fn bundle_for(&mut self, assignment: &ListingAssignment<'_>) -> &mut ListingBundle {
        let position = match self.index.get(&assignment.type_id) {
            Some(position) => *position,
            None => {
                self.bundles.push(ListingBundle::new(assignment));
                let position = self.bundles.len() - 1;
                self.index.insert(assignment.type_id, position);
                position
            }
        };

        let bundle = &mut self.bundles[position];
        bundle.absorb_label(assignment);
        bundle
    }
}

/// Group qualifying offences and top-level applications by listing type, in discovery order.
pub(crate) fn discover(hearing: &Hearing) -> Vec<ListingBundle> {
    let mut set = BundleSet::default();

    for (case_index, case) in hearing.prosecution_cases.iter().flatten().enumerate() {
        for (defendant_index, defendant) in case.defendants.iter().enumerate() {
            for (offence_index, offence) in defendant.offences.iter().enumerate() {
                let results = ResultBearingNode::Offence(offence).judicial_results();
                if let Some(assignment) = assign(results) {
                    set.bundle_for(&assignment).offences.insert(OffencePosition {
                        case: case_index,
                        defendant: defendant_index,
                        offence: offence_index,
                    });
                }
            }
        }
    }

    for (application_index, application) in hearing.court_applications.iter().flatten().enumerate()
    {
        let results = ResultBearingNode::Application(application).judicial_results();
        if let Some(assignment) = assign(results) {
            set.bundle_for(&assignment)
                .applications
                .insert(application_index);
        }
    }

    set.bundles
}
