#[derive(Clone, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Fixture {
    #[strum(serialize = "clinic-visit")]
    #[value(name = "clinic-visit")]
    ClinicVisit,
    #[strum(serialize = "standup")]
    #[value(name = "standup")]
    Standup,
}

impl Fixture {
    pub fn json(&self) -> &'static str {
        match self {
            Self::ClinicVisit => CLINIC_VISIT_JSON,
            Self::Standup => STANDUP_JSON,
        }
    }
}

const CLINIC_VISIT_JSON: &str = r#"[
  {"id": "w0", "text": "Lovely", "start_ms": 0, "end_ms": 400, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w1", "text": "weather", "start_ms": 400, "end_ms": 760, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w2", "text": "we're", "start_ms": 760, "end_ms": 1000, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w3", "text": "having,", "start_ms": 1000, "end_ms": 1340, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w4", "text": "isn't", "start_ms": 1480, "end_ms": 1720, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w5", "text": "it?", "start_ms": 1720, "end_ms": 1900, "speaker": "CLINICIAN", "segment_id": "s0", "category": "small_talk"},
  {"id": "w6", "text": "Sure", "start_ms": 2400, "end_ms": 2680, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w7", "text": "is,", "start_ms": 2680, "end_ms": 2840, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w8", "text": "finally", "start_ms": 2900, "end_ms": 3280, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w9", "text": "feels", "start_ms": 3280, "end_ms": 3560, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w10", "text": "like", "start_ms": 3560, "end_ms": 3700, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w11", "text": "spring.", "start_ms": 3700, "end_ms": 4100, "speaker": "PATIENT", "segment_id": "s1", "category": "small_talk"},
  {"id": "w12", "text": "So", "start_ms": 5000, "end_ms": 5180, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w13", "text": "what", "start_ms": 5180, "end_ms": 5400, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w14", "text": "brings", "start_ms": 5400, "end_ms": 5700, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w15", "text": "you", "start_ms": 5700, "end_ms": 5820, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w16", "text": "in", "start_ms": 5820, "end_ms": 5960, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w17", "text": "today?", "start_ms": 5960, "end_ms": 6400, "speaker": "CLINICIAN", "segment_id": "s2"},
  {"id": "w18", "text": "My", "start_ms": 7100, "end_ms": 7300, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w19", "text": "right", "start_ms": 7300, "end_ms": 7560, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w20", "text": "knee", "start_ms": 7560, "end_ms": 7840, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w21", "text": "has", "start_ms": 7840, "end_ms": 7980, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w22", "text": "been", "start_ms": 7980, "end_ms": 8160, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w23", "text": "aching", "start_ms": 8160, "end_ms": 8560, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w24", "text": "for", "start_ms": 8560, "end_ms": 8700, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w25", "text": "about", "start_ms": 8700, "end_ms": 8960, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w26", "text": "two", "start_ms": 8960, "end_ms": 9140, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w27", "text": "weeks", "start_ms": 9140, "end_ms": 9400, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w28", "text": "now.", "start_ms": 9400, "end_ms": 9700, "speaker": "PATIENT", "segment_id": "s3"},
  {"id": "w29", "text": "Does", "start_ms": 10400, "end_ms": 10640, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w30", "text": "it", "start_ms": 10640, "end_ms": 10760, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w31", "text": "hurt", "start_ms": 10760, "end_ms": 11020, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w32", "text": "more", "start_ms": 11020, "end_ms": 11260, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w33", "text": "when", "start_ms": 11260, "end_ms": 11420, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w34", "text": "you", "start_ms": 11420, "end_ms": 11540, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w35", "text": "climb", "start_ms": 11540, "end_ms": 11840, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w36", "text": "stairs?", "start_ms": 11840, "end_ms": 12300, "speaker": "CLINICIAN", "segment_id": "s4"},
  {"id": "w37", "text": "Stairs", "start_ms": 13100, "end_ms": 13480, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w38", "text": "are", "start_ms": 13480, "end_ms": 13620, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w39", "text": "the", "start_ms": 13620, "end_ms": 13740, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w40", "text": "worst,", "start_ms": 13740, "end_ms": 14120, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w41", "text": "especially", "start_ms": 14260, "end_ms": 14800, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w42", "text": "coming", "start_ms": 14800, "end_ms": 15140, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w43", "text": "down.", "start_ms": 15140, "end_ms": 15520, "speaker": "PATIENT", "segment_id": "s5"},
  {"id": "w44", "text": "Let's", "start_ms": 16300, "end_ms": 16580, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w45", "text": "take", "start_ms": 16580, "end_ms": 16800, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w46", "text": "a", "start_ms": 16800, "end_ms": 16880, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w47", "text": "look", "start_ms": 16880, "end_ms": 17120, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w48", "text": "at", "start_ms": 17120, "end_ms": 17240, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w49", "text": "it,", "start_ms": 17240, "end_ms": 17460, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w50", "text": "hop", "start_ms": 17600, "end_ms": 17820, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w51", "text": "up", "start_ms": 17820, "end_ms": 17960, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w52", "text": "on", "start_ms": 17960, "end_ms": 18100, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w53", "text": "the", "start_ms": 18100, "end_ms": 18220, "speaker": "CLINICIAN", "segment_id": "s6"},
  {"id": "w54", "text": "table.", "start_ms": 18220, "end_ms": 18700, "speaker": "CLINICIAN", "segment_id": "s6"}
]"#;

const STANDUP_JSON: &str = r#"[
  {"id": "m0", "text": "Yesterday", "start_ms": 0, "end_ms": 520, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m1", "text": "I", "start_ms": 520, "end_ms": 640, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m2", "text": "finished", "start_ms": 640, "end_ms": 1040, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m3", "text": "the", "start_ms": 1040, "end_ms": 1160, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m4", "text": "export", "start_ms": 1160, "end_ms": 1540, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m5", "text": "pipeline.", "start_ms": 1540, "end_ms": 2080, "speaker": "ALICE", "segment_id": "t0"},
  {"id": "m6", "text": "Today", "start_ms": 2900, "end_ms": 3220, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m7", "text": "I'm", "start_ms": 3220, "end_ms": 3420, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m8", "text": "picking", "start_ms": 3420, "end_ms": 3760, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m9", "text": "up", "start_ms": 3760, "end_ms": 3880, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m10", "text": "the", "start_ms": 3880, "end_ms": 4000, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m11", "text": "retry", "start_ms": 4000, "end_ms": 4340, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m12", "text": "logic.", "start_ms": 4340, "end_ms": 4800, "speaker": "ALICE", "segment_id": "t1"},
  {"id": "m13", "text": "Quick", "start_ms": 5600, "end_ms": 5900, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m14", "text": "flag,", "start_ms": 5900, "end_ms": 6180, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m15", "text": "staging", "start_ms": 6300, "end_ms": 6700, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m16", "text": "is", "start_ms": 6700, "end_ms": 6820, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m17", "text": "still", "start_ms": 6820, "end_ms": 7100, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m18", "text": "on", "start_ms": 7100, "end_ms": 7220, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m19", "text": "the", "start_ms": 7220, "end_ms": 7340, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m20", "text": "old", "start_ms": 7340, "end_ms": 7560, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m21", "text": "schema.", "start_ms": 7560, "end_ms": 8060, "speaker": "BEN", "segment_id": "t2"},
  {"id": "m22", "text": "Nice", "start_ms": 8900, "end_ms": 9160, "speaker": "CHLOE", "segment_id": "t3", "category": "small_talk"},
  {"id": "m23", "text": "haircut", "start_ms": 9160, "end_ms": 9580, "speaker": "CHLOE", "segment_id": "t3", "category": "small_talk"},
  {"id": "m24", "text": "by", "start_ms": 9580, "end_ms": 9700, "speaker": "CHLOE", "segment_id": "t3", "category": "small_talk"},
  {"id": "m25", "text": "the", "start_ms": 9700, "end_ms": 9820, "speaker": "CHLOE", "segment_id": "t3", "category": "small_talk"},
  {"id": "m26", "text": "way.", "start_ms": 9820, "end_ms": 10120, "speaker": "CHLOE", "segment_id": "t3", "category": "small_talk"},
  {"id": "m27", "text": "Migration", "start_ms": 11000, "end_ms": 11520, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m28", "text": "lands", "start_ms": 11520, "end_ms": 11840, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m29", "text": "tonight", "start_ms": 11840, "end_ms": 12260, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m30", "text": "after", "start_ms": 12400, "end_ms": 12680, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m31", "text": "the", "start_ms": 12680, "end_ms": 12800, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m32", "text": "freeze", "start_ms": 12800, "end_ms": 13160, "speaker": "BEN", "segment_id": "t4"},
  {"id": "m33", "text": "lifts.", "start_ms": 13160, "end_ms": 13600, "speaker": "BEN", "segment_id": "t4"}
]"#;
