//! TAI-UTC offsets from IERS Bulletin C.

/// (first MJD the offset applies, TAI-UTC seconds)
const LEAP_SECONDS: [(i32, i32); 28] = [
    (41317, 10), // 1972 Jan 1
    (41499, 11), // 1972 Jul 1
    (41683, 12), // 1973 Jan 1
    (42048, 13), // 1974 Jan 1
    (42413, 14), // 1975 Jan 1
    (42778, 15), // 1976 Jan 1
    (43144, 16), // 1977 Jan 1
    (43509, 17), // 1978 Jan 1
    (43874, 18), // 1979 Jan 1
    (44239, 19), // 1980 Jan 1
    (44786, 20), // 1981 Jul 1
    (45151, 21), // 1982 Jul 1
    (45516, 22), // 1983 Jul 1
    (46247, 23), // 1985 Jul 1
    (47161, 24), // 1988 Jan 1
    (47892, 25), // 1990 Jan 1
    (48257, 26), // 1991 Jan 1
    (48804, 27), // 1992 Jul 1
    (49169, 28), // 1993 Jul 1
    (49534, 29), // 1994 Jul 1
    (50083, 30), // 1996 Jan 1
    (50630, 31), // 1997 Jul 1
    (51179, 32), // 1999 Jan 1
    (53736, 33), // 2006 Jan 1
    (54832, 34), // 2009 Jan 1
    (56109, 35), // 2012 Jul 1
    (57204, 36), // 2015 Jul 1
    (57754, 37), // 2017 Jan 1
];

/// Last MJD the table is known to be complete for (2025 Dec 31).
pub const TABLE_HORIZON_MJD: i32 = 61040;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeapSeconds {
    pub tai_minus_utc: i32,
    /// The date lies outside the span where the table is known to be correct.
    pub extrapolated: bool,
}

pub fn tai_minus_utc(mjd: i32) -> LeapSeconds {
    let first = LEAP_SECONDS[0];
    if mjd < first.0 {
        return LeapSeconds {
            tai_minus_utc: first.1,
            extrapolated: true,
        };
    }
    let tai_minus_utc = LEAP_SECONDS
        .iter()
        .rev()
        .find(|(start, _)| mjd >= *start)
        .map_or(first.1, |(_, offset)| *offset);
    LeapSeconds {
        tai_minus_utc,
        extrapolated: mjd > TABLE_HORIZON_MJD,
    }
}
