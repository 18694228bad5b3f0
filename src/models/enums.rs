use anyhow::anyhow;
use diesel::{
    backend::Backend,
    deserialize::{self, FromSql},
    mysql::Mysql,
    serialize::{self, Output, ToSql},
    sql_types::Text,
};
use std::{fmt, io::Write, str::FromStr};

/// Declares a closed set of labels stored as MySQL `ENUM` text.
///
/// The stored label is the variant name, so `ALL` must stay in sync with the
/// `ENUM(...)` lists in the migrations.
macro_rules! closed_enum {
    ( $name:ident, $kind:expr, [ $( $variant:ident ),+ $(,)? ] ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
        #[sql_type = "Text"]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                match s {
                    $( stringify!($variant) => Ok($name::$variant), )+
                    _ => Err(anyhow!("Unknown {} '{}'", $kind, s)),
                }
            }
        }

        impl ToSql<Text, Mysql> for $name {
            fn to_sql<W: Write>(&self, out: &mut Output<W, Mysql>) -> serialize::Result {
                <str as ToSql<Text, Mysql>>::to_sql(self.as_str(), out)
            }
        }

        impl FromSql<Text, Mysql> for $name {
            fn from_sql(bytes: Option<&<Mysql as Backend>::RawValue>) -> deserialize::Result<Self> {
                let label = <String as FromSql<Text, Mysql>>::from_sql(bytes)?;
                Ok(label.parse::<$name>()?)
            }
        }
    };
}

closed_enum!(
    Ailment,
    "ailment",
    [
        VaguePromptSyndrome,
        ScopeCreepFever,
        ContextStarvation,
        MicromanagementTrauma,
        HallucinationAnxiety,
        TokenLimitClaustrophobia,
    ]
);

closed_enum!(
    Treatment,
    "treatment",
    [
        SpecTherapy,
        BoundarySetting,
        ContextInfusion,
        TrustExercises,
        GroundingMeditation,
        ChunkingCounseling,
    ]
);
