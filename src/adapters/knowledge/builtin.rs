//! Built-in demo knowledge set.
//!
//! A small content pack covering the demo classifier vocabulary, so the
//! crate works end to end without an external content directory. The
//! healthy sentinel has no record on purpose.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::QUESTION_BANK_SIZE;
use crate::domain::knowledge::ConditionRecord;

fn record(
    description: &str,
    causes: &[&str],
    symptoms: &[&str],
    treatment: &[&str],
    questions: [&str; QUESTION_BANK_SIZE],
) -> ConditionRecord {
    ConditionRecord::new(
        description,
        causes.iter().map(|s| s.to_string()).collect(),
        symptoms.iter().map(|s| s.to_string()).collect(),
        treatment.iter().map(|s| s.to_string()).collect(),
        questions.map(str::to_string),
    )
}

static DEMO_RECORDS: Lazy<HashMap<String, ConditionRecord>> = Lazy::new(|| {
    let mut records = HashMap::new();

    records.insert(
        "acne".to_string(),
        record(
            "Acne is a common skin condition where pores become blocked by oil \
             and dead skin cells, producing pimples, blackheads and whiteheads. \
             It most often appears on the face, chest and upper back.",
            &[
                "Excess oil production in the skin",
                "Blocked hair follicles",
                "Hormonal changes, often during puberty",
            ],
            &[
                "Pimples, blackheads or whiteheads",
                "Oily skin",
                "Tender red bumps",
            ],
            &[
                "Wash the affected area gently twice a day",
                "Over-the-counter creams with benzoyl peroxide or salicylic acid",
                "See a doctor for persistent or severe breakouts",
            ],
            [
                "Do you see pimples, blackheads or whiteheads on the area?",
                "Is the affected skin oily to the touch?",
                "Is the area on your face, chest or upper back?",
                "Did the spots appear gradually rather than overnight?",
            ],
        ),
    );

    records.insert(
        "eczema".to_string(),
        record(
            "Eczema (atopic dermatitis) makes skin dry, itchy and inflamed. It \
             is most common in children but can occur at any age, and tends to \
             flare up periodically.",
            &[
                "An overactive immune response to irritants",
                "Dry skin losing its protective barrier",
                "Family history of eczema, allergies or asthma",
            ],
            &[
                "Intense itching, often worse at night",
                "Dry, cracked or scaly patches",
                "Red to brownish-grey patches in skin folds",
            ],
            &[
                "Moisturise the skin at least twice a day",
                "Anti-itch creams such as hydrocortisone",
                "Avoid known triggers like harsh soaps",
            ],
            [
                "Does the area itch intensely, especially at night?",
                "Is the skin dry, cracked or scaly?",
                "Does the patch flare up and then settle down repeatedly?",
                "Do you have a history of allergies or asthma?",
            ],
        ),
    );

    records.insert(
        "psoriasis".to_string(),
        record(
            "Psoriasis is an immune-driven condition that speeds up skin cell \
             turnover, building thick scaly plaques. It commonly affects the \
             elbows, knees and scalp, and often runs in families.",
            &[
                "An immune system attacking healthy skin cells",
                "Genetic predisposition",
                "Triggers such as stress, cold weather or skin injury",
            ],
            &[
                "Thick red patches covered with silvery scales",
                "Dry, cracked skin that may bleed",
                "Itching or burning around the patches",
            ],
            &[
                "Topical corticosteroid creams",
                "Regular moisturising to reduce scaling",
                "Light therapy for widespread plaques",
            ],
            [
                "Are the patches covered with silvery-white scales?",
                "Are the patches on your elbows, knees or scalp?",
                "Does the skin crack or bleed when scratched?",
                "Does anyone in your family have psoriasis?",
            ],
        ),
    );

    records.insert(
        "rosacea".to_string(),
        record(
            "Rosacea is a long-term condition causing flushing, persistent \
             redness and visible blood vessels, usually across the cheeks and \
             nose. Flare-ups often follow triggers such as heat, alcohol or \
             spicy food.",
            &[
                "Blood vessels that dilate too easily",
                "Triggers such as sun, heat, alcohol or spicy food",
                "A family tendency to flush easily",
            ],
            &[
                "Persistent redness across cheeks and nose",
                "Visible small blood vessels",
                "Small red bumps that may contain pus",
            ],
            &[
                "Identify and avoid personal triggers",
                "Daily sunscreen on the face",
                "Prescription creams or tablets from a doctor",
            ],
            [
                "Is the redness concentrated on your cheeks and nose?",
                "Do you flush easily after heat, alcohol or spicy food?",
                "Can you see small broken blood vessels in the area?",
                "Has the redness persisted for weeks rather than days?",
            ],
        ),
    );

    records.insert(
        "warts".to_string(),
        record(
            "Warts are small, rough growths caused by the human papillomavirus \
             (HPV). They spread through direct contact and most often appear \
             on the hands and feet.",
            &[
                "Infection with the human papillomavirus",
                "Direct contact with a wart or contaminated surface",
                "Broken skin that lets the virus enter",
            ],
            &[
                "Small, rough, grainy growths",
                "Tiny black dots inside the growth",
                "Growths appearing alone or in clusters",
            ],
            &[
                "Over-the-counter salicylic acid treatments",
                "Freezing (cryotherapy) by a clinician",
                "Avoid picking to stop the virus spreading",
            ],
            [
                "Is the growth small, rough and grainy to the touch?",
                "Can you see tiny black dots inside the growth?",
                "Is the growth on your hands or feet?",
                "Have similar growths appeared nearby?",
            ],
        ),
    );

    records
});

/// The demo content set, keyed by condition label.
pub(crate) fn demo_records() -> &'static HashMap<String, ConditionRecord> {
    &DEMO_RECORDS
}
