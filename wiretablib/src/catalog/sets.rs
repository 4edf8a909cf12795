//! Static product rows, one array per catalog table.

use super::{NumericRow, TextRow};

pub(super) const SINGLE_ETFE_002: &[TextRow] = &[
    ("S22A01TX-2", "22", "0.0253", "0.643", "0.0293", "0.744", "2.07"),
    ("S23A01TX-2", "23", "0.0226", "0.574", "0.0266", "0.676", "1.66"),
    ("S24A01TX-2", "24", "0.0201", "0.511", "0.0241", "0.612", "1.32"),
    ("S25A01TX-2", "25", "0.0179", "0.455", "0.0219", "0.556", "1.06"),
    ("S26A01TX-2", "26", "0.0159", "0.404", "0.0199", "0.505", "0.85"),
    ("S27A01TX-2", "27", "0.0142", "0.361", "0.0182", "0.462", "0.69"),
    ("S28A01TX-2", "28", "0.0126", "0.320", "0.0166", "0.422", "0.55"),
    ("S29A01TX-2", "29", "0.0113", "0.287", "0.0153", "0.389", "0.45"),
    ("S30A01TX-2", "30", "0.0100", "0.254", "0.0140", "0.356", "0.36"),
    ("S31A01TX-2", "31", "0.0089", "0.226", "0.0129", "0.328", "0.29"),
    ("S32A01TX-2", "32", "0.0080", "0.203", "0.0120", "0.305", "0.24"),
    ("S33A01TX-2", "33", "0.0071", "0.180", "0.0111", "0.282", "0.20"),
    ("S34A01TX-2", "34", "0.0063", "0.160", "0.0103", "0.262", "0.16"),
    ("S35A01TX-2", "35", "0.0056", "0.142", "0.0096", "0.244", "0.13"),
    ("S36A01TX-2", "36", "0.0050", "0.127", "0.0090", "0.229", "0.11"),
    ("S37A01TX-2", "37", "0.0045", "0.114", "0.0085", "0.216", "0.09"),
    ("S38A01TX-2", "38", "0.0040", "0.102", "0.0080", "0.203", "0.08"),
    ("S39A01TX-2", "39", "0.0035", "0.089", "0.0075", "0.191", "0.06"),
    ("S40A01TX-2", "40", "0.0031", "0.079", "0.0071", "0.180", "0.05"),
];

pub(super) const SINGLE_FEP_003: &[TextRow] = &[
    ("S18A01F-3", "18", "0.0403", "1.024", "0.0463", "1.176", "5.31"),
    ("S18A19F-3", "18(19/30)", "0.0416", "1.209", "0.0385", "1.361", "6.33"),
    ("S20A01F-3", "20", "0.0320", "0.813", "0.0380", "0.965", "3.41"),
    ("S20A19F-3", "20(19/32)", "0.0385", "0.978", "0.0445", "1.130", "4.12"),
    ("S22A01F-3", "22", "0.0253", "0.643", "0.0313", "0.795", "2.19"),
    ("S22A19F-3", "22(19/32)", "0.0296", "0.749", "0.0345", "0.925", "2.62"),
    ("S24A01F-3", "24", "0.0201", "0.511", "0.0261", "0.663", "1.43"),
    ("S24A19F-3", "24(19/36)", "0.0242", "0.615", "0.0302", "0.767", "1.71"),
    ("S25A01F-3", "25", "0.0179", "0.455", "0.0239", "0.607", "1.16"),
    ("S26A01F-3", "26", "0.0159", "0.483", "0.0250", "0.635", "0.96"),
    ("S27A01F-3", "27", "0.0142", "0.361", "0.0202", "0.513", "0.76"),
    ("S28A01F-3", "28", "0.0126", "0.320", "0.0186", "0.472", "0.62"),
    ("S29A01F-3", "29", "0.0113", "0.287", "0.0173", "0.439", "0.52"),
    ("S30A01F-3", "30", "0.0100", "0.254", "0.0160", "0.406", "0.42"),
    ("S31A01F-3", "31", "0.0089", "0.226", "0.0149", "0.378", "0.35"),
    ("S32A01F-3", "32", "0.0080", "0.203", "0.0140", "0.356", "0.29"),
    ("S33A01F-3", "33", "0.0071", "0.180", "0.0131", "0.333", "0.24"),
    ("S34A01F-3", "34", "0.0063", "0.160", "0.0123", "0.312", "0.20"),
    ("S35A01F-3", "35", "0.0056", "0.142", "0.0116", "0.295", "0.17"),
    ("S36A01F-3", "36", "0.0050", "0.127", "0.0110", "0.279", "0.15"),
    ("S37A01F-3", "37", "0.0045", "0.114", "0.0105", "0.267", "0.13"),
    ("S38A01F-3", "38", "0.0040", "0.102", "0.0100", "0.254", "0.11"),
    ("S39A01F-3", "39", "0.0035", "0.089", "0.0095", "0.241", "0.09"),
    ("S40A01F-3", "40", "0.0031", "0.079", "0.0091", "0.231", "0.08"),
];

pub(super) const SINGLE_PFA_003: &[TextRow] = &[
    ("S22A01PX-3", "22", "0.0253", "0.643", "0.0313", "0.795", "2.19"),
    ("S24A01PX-3", "24", "0.0201", "0.511", "0.0261", "0.663", "1.43"),
    ("S25A01PX-3", "25", "0.0179", "0.455", "0.0239", "0.607", "1.25"),
    ("S26A01PX-3", "26", "0.0159", "0.404", "0.0219", "0.556", "0.96"),
    ("S27A01PX-3", "27", "0.0142", "0.361", "0.0202", "0.513", "0.76"),
    ("S28A01PX-3", "28", "0.0126", "0.320", "0.0186", "0.473", "0.63"),
    ("S29A01PX-3", "29", "0.0113", "0.287", "0.0173", "0.439", "0.52"),
    ("S30A01PX-3", "30", "0.0100", "0.254", "0.0160", "0.406", "0.42"),
    ("S31A01PX-3", "31", "0.0089", "0.226", "0.0149", "0.378", "0.35"),
    ("S32A01PX-3", "32", "0.0080", "0.203", "0.0140", "0.356", "0.29"),
    ("S33A01PX-3", "33", "0.0071", "0.180", "0.0131", "0.333", "0.24"),
    ("S34A01PX-3", "34", "0.0063", "0.160", "0.0123", "0.312", "0.20"),
    ("S35A01PX-3", "35", "0.0056", "0.142", "0.0116", "0.295", "0.17"),
    ("S36A01PX-3", "36", "0.0050", "0.127", "0.0110", "0.279", "0.14"),
    ("S37A01PX-3", "37", "0.0045", "0.114", "0.0105", "0.267", "0.12"),
    ("S38A01PX-3", "38", "0.0040", "0.102", "0.0100", "0.254", "0.11"),
    ("S39A01PX-3", "39", "0.0035", "0.089", "0.0095", "0.241", "0.09"),
    ("S40A01PX-3", "40", "0.0031", "0.079", "0.0091", "0.231", "0.08"),
];

pub(super) const DOUBLE_ETFE_001: &[TextRow] = &[
    ("D30A01TXX-1", "30", "0.0100", "0.254", "0.0140", "0.356", "0.36"),
    ("D31A01TXX-1", "31", "0.0089", "0.226", "0.0129", "0.328", "0.29"),
    ("D32A01TXX-1", "32", "0.0080", "0.203", "0.0120", "0.305", "0.24"),
    ("D33A01TXX-1", "33", "0.0071", "0.180", "0.0111", "0.282", "0.20"),
    ("D34A01TXX-1", "34", "0.0063", "0.160", "0.0103", "0.262", "0.16"),
    ("D35A01TXX-1", "35", "0.0056", "0.142", "0.0096", "0.244", "0.13"),
    ("D36A01TXX-1", "36", "0.0050", "0.127", "0.0090", "0.229", "0.11"),
    ("D37A01TXX-1", "37", "0.0045", "0.114", "0.0085", "0.216", "0.09"),
    ("D38A01TXX-1", "38", "0.0040", "0.102", "0.0080", "0.203", "0.08"),
    ("D39A01TXX-1", "39", "0.0035", "0.089", "0.0075", "0.191", "0.06"),
    ("D40A01TXX-1", "40", "0.0031", "0.079", "0.0071", "0.180", "0.05"),
];

pub(super) const DOUBLE_TCA2_001: &[NumericRow] = &[
    ("TCA2 18 AWG", 18, 0.0403, 1.024, 0.0463, 1.176, 5.22),
    ("TCA2 19 AWG", 19, 0.0359, 0.912, 0.0419, 1.064, 4.17),
    ("TCA2 20 AWG", 20, 0.032, 0.813, 0.038, 0.965, 3.33),
    ("TCA2 21 AWG", 21, 0.0285, 0.724, 0.0345, 0.876, 2.68),
    ("TCA2 22 AWG", 22, 0.0253, 0.643, 0.0313, 0.795, 2.14),
    ("TCA2 23 AWG", 23, 0.0226, 0.574, 0.0286, 0.726, 1.73),
    ("TCA2 24 AWG", 24, 0.0201, 0.511, 0.0261, 0.663, 1.38),
    ("TCA2 25 AWG", 25, 0.0179, 0.455, 0.0239, 0.607, 1.12),
    ("TCA2 26 AWG", 26, 0.0159, 0.404, 0.0219, 0.556, 0.9),
    ("TCA2 27 AWG", 27, 0.0142, 0.361, 0.0202, 0.513, 0.73),
    ("TCA2 28 AWG", 28, 0.0126, 0.32, 0.0186, 0.472, 0.59),
    ("TCA2 29 AWG", 29, 0.0113, 0.287, 0.0173, 0.439, 0.49),
    ("TCA2 30 AWG", 30, 0.01, 0.254, 0.016, 0.406, 0.39),
    ("TCA2 31 AWG", 31, 0.0089, 0.226, 0.0149, 0.378, 0.32),
    ("TCA2 32 AWG", 32, 0.008, 0.203, 0.014, 0.356, 0.27),
    ("TCA2 33 AWG", 33, 0.0071, 0.18, 0.0131, 0.307, 0.23),
    ("TCA2 34 AWG", 34, 0.0063, 0.16, 0.0113, 0.287, 0.19),
    ("TCA2 35 AWG", 35, 0.0056, 0.142, 0.0106, 0.269, 0.16),
    ("TCA2 36 AWG", 36, 0.005, 0.127, 0.01, 0.254, 0.13),
    ("TCA2 37 AWG", 37, 0.0045, 0.114, 0.0095, 0.241, 0.11),
    ("TCA2 38 AWG", 38, 0.004, 0.102, 0.009, 0.229, 0.1),
    ("TCA2 39 AWG", 39, 0.0035, 0.089, 0.0085, 0.216, 0.08),
    ("TCA2 40 AWG", 40, 0.0031, 0.079, 0.0081, 0.206, 0.07),
];

pub(super) const TRIPLE_PFA_002: &[TextRow] = &[
    ("T10A01PXX-2", "10", "0.1019", "2.588", "0.1139", "2.893", "33.37"),
    ("T10A37PXX-2", "10(37/26)", "0.1070", "2.718", "0.1190", "3.023", "30.19"),
    ("T12A19PXX-2", "12(19/25)", "0.0862", "2.189", "0.0982", "2.494", "19.97"),
    ("T14A19PXX-2", "14(19/27)", "0.0679", "1.725", "0.0799", "2.029", "13.07"),
    ("T16A01PXX-2", "16", "0.0508", "1.290", "0.0628", "1.595", "8.81"),
    ("T16A19PXX-2", "16(19/29)", "0.0539", "1.369", "0.0659", "1.674", "8.31"),
    ("T18A01PXX-2", "18", "0.0403", "1.024", "0.0523", "1.328", "5.75"),
    ("T18A19PXX-2", "19", "0.0359", "0.912", "0.0479", "1.217", "4.65"),
    ("T20A01PXX-2", "20", "0.0320", "0.813", "0.0440", "1.118", "3.94"),
    ("T21A01PXX-2", "21", "0.0285", "0.724", "0.0405", "1.029", "3.08"),
    ("T22A01PXX-2", "22", "0.0253", "0.643", "0.0373", "0.947", "2.50"),
    ("T23A01PXX-2", "23", "0.0226", "0.574", "0.0346", "0.879", "2.06"),
    ("T24A01PXX-2", "24", "0.0201", "0.511", "0.0321", "0.815", "1.69"),
    ("T25A01PXX-2", "25", "0.0179", "0.455", "0.0299", "0.759", "1.40"),
    ("T26A01PXX-2", "26", "0.0159", "0.404", "0.0279", "0.709", "1.16"),
    ("T27A01PXX-2", "27", "0.0142", "0.361", "0.0262", "0.665", "0.97"),
    ("T28A01PXX-2", "28", "0.0126", "0.320", "0.0246", "0.625", "0.82"),
    ("T29A01PXX-2", "29", "0.0113", "0.287", "0.0233", "0.592", "0.70"),
    ("T30A01PXX-2", "30", "0.0100", "0.254", "0.0220", "0.559", "0.59"),
    ("T31A01PXX-2", "31", "0.0089", "0.226", "0.0209", "0.531", "0.51"),
    ("T32A01PXX-2", "32", "0.0080", "0.203", "0.0200", "0.508", "0.45"),
];

pub(super) const TRIPLE_ETFE_003: &[TextRow] = &[
    ("T10A01TXX-3", "10", "0.1019", "2.588", "0.1199", "3.045", "33.74"),
    ("T12A37TXX-3", "12(7/25)", "0.1070", "2.718", "0.1250", "3.175", "31.30"),
    ("T12A01TXX-3", "12", "0.0808", "2.052", "0.0988", "2.510", "21.67"),
    ("T12A51TXX-3", "12(19/25)", "0.0862", "2.189", "0.1042", "2.647", "20.78"),
    ("T14A01TXX-3", "14", "0.0641", "1.628", "0.0821", "2.085", "13.92"),
    ("T14A07TXX-3", "14(7/22)", "0.0679", "1.725", "0.0859", "2.182", "13.40"),
    ("T16A01TXX-3", "16", "0.0508", "1.290", "0.0688", "1.748", "9.05"),
    ("T16A19TXX-3", "16(19/29)", "0.0539", "1.369", "0.0719", "1.826", "8.77"),
    ("T18A01TXX-3", "18", "0.0403", "1.024", "0.0583", "1.481", "5.93"),
    ("T19A01TXX-3", "18(19/30)", "0.0478", "1.209", "0.0658", "1.661", "7.05"),
    ("T20A01TXX-3", "20", "0.0320", "0.813", "0.0500", "1.270", "3.94"),
    ("T20A19TXX-3", "20(19/32)", "0.0385", "0.978", "0.0565", "1.435", "4.74"),
    ("T22A01TXX-3", "22", "0.0253", "0.643", "0.0433", "1.100", "2.65"),
    ("T22A19TXX-3", "22(19/34)", "0.0295", "0.749", "0.0475", "1.207", "3.13"),
    ("T24A01TXX-3", "24", "0.0201", "0.511", "0.0381", "0.968", "1.83"),
    ("T24A19TXX-3", "24(19/36)", "0.0242", "0.615", "0.0422", "1.072", "2.16"),
    ("T26A01TXX-3", "26", "0.0159", "0.404", "0.0339", "0.861", "1.28"),
    ("T28A01TXX-3", "28", "0.0126", "0.320", "0.0306", "0.777", "0.93"),
    ("T30A01TXX-3", "30", "0.0100", "0.254", "0.0280", "0.711", "0.69"),
    ("T32A01TXX-3", "32", "0.0080", "0.203", "0.0260", "0.660", "0.55"),
];
