//! Carbonate species and the fifteen pairs that pin down the system.

use core::fmt;

/// Quantity of the carbonate system that can be given as input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Co2,
    Ph,
    Hco3,
    Co3,
    Ta,
    Dic,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Co2,
        Species::Ph,
        Species::Hco3,
        Species::Co3,
        Species::Ta,
        Species::Dic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Co2 => "CO2",
            Species::Ph => "pH",
            Species::Hco3 => "HCO3",
            Species::Co3 => "CO3",
            Species::Ta => "TA",
            Species::Dic => "DIC",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered pair of known species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    Co2Ph,
    Co2Hco3,
    Co2Co3,
    Co2Ta,
    Co2Dic,
    PhHco3,
    PhCo3,
    PhTa,
    PhDic,
    Hco3Co3,
    Hco3Ta,
    Hco3Dic,
    Co3Ta,
    Co3Dic,
    TaDic,
}

impl Pair {
    pub const ALL: [Pair; 15] = [
        Pair::Co2Ph,
        Pair::Co2Hco3,
        Pair::Co2Co3,
        Pair::Co2Ta,
        Pair::Co2Dic,
        Pair::PhHco3,
        Pair::PhCo3,
        Pair::PhTa,
        Pair::PhDic,
        Pair::Hco3Co3,
        Pair::Hco3Ta,
        Pair::Hco3Dic,
        Pair::Co3Ta,
        Pair::Co3Dic,
        Pair::TaDic,
    ];

    /// The two species, in argument order.
    pub fn species(&self) -> (Species, Species) {
        use Species::*;
        match self {
            Pair::Co2Ph => (Co2, Ph),
            Pair::Co2Hco3 => (Co2, Hco3),
            Pair::Co2Co3 => (Co2, Co3),
            Pair::Co2Ta => (Co2, Ta),
            Pair::Co2Dic => (Co2, Dic),
            Pair::PhHco3 => (Ph, Hco3),
            Pair::PhCo3 => (Ph, Co3),
            Pair::PhTa => (Ph, Ta),
            Pair::PhDic => (Ph, Dic),
            Pair::Hco3Co3 => (Hco3, Co3),
            Pair::Hco3Ta => (Hco3, Ta),
            Pair::Hco3Dic => (Hco3, Dic),
            Pair::Co3Ta => (Co3, Ta),
            Pair::Co3Dic => (Co3, Dic),
            Pair::TaDic => (Ta, Dic),
        }
    }

    /// Pair made of `a` and `b` in either order; `None` if `a == b`.
    pub fn of(a: Species, b: Species) -> Option<Pair> {
        Pair::ALL.into_iter().find(|p| {
            let (x, y) = p.species();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pair::Co2Ph => "CO2_pH",
            Pair::Co2Hco3 => "CO2_HCO3",
            Pair::Co2Co3 => "CO2_CO3",
            Pair::Co2Ta => "CO2_TA",
            Pair::Co2Dic => "CO2_DIC",
            Pair::PhHco3 => "pH_HCO3",
            Pair::PhCo3 => "pH_CO3",
            Pair::PhTa => "pH_TA",
            Pair::PhDic => "pH_DIC",
            Pair::Hco3Co3 => "HCO3_CO3",
            Pair::Hco3Ta => "HCO3_TA",
            Pair::Hco3Dic => "HCO3_DIC",
            Pair::Co3Ta => "CO3_TA",
            Pair::Co3Dic => "CO3_DIC",
            Pair::TaDic => "TA_DIC",
        }
    }

    pub fn contains(&self, s: Species) -> bool {
        let (a, b) = self.species();
        a == s || b == s
    }

    /// pH given: closed form, no root-finding.
    pub fn is_direct(&self) -> bool {
        self.contains(Species::Ph)
    }

    /// Alkalinity involved: total borate is required.
    pub fn needs_bt(&self) -> bool {
        self.contains(Species::Ta)
    }

    /// Starting H+ for the root-finder.
    ///
    /// HCO3&DIC has two positive roots and the smaller one is physical, so it
    /// starts from zero; every other pair starts above all roots at 1.0.
    pub fn initial_guess(&self) -> f64 {
        match self {
            Pair::Hco3Dic => 0.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
