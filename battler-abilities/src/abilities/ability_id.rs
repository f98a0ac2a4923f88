use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The stable ID of an ability.
///
/// IDs are serialized as lowercase alphanumeric strings. The display name of an ability is also
/// accepted when deserializing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilityId {
    #[string = "aerilate"]
    Aerilate,
    #[string = "aftermath"]
    Aftermath,
    #[string = "airlock"]
    #[alias = "Air Lock"]
    AirLock,
    #[string = "arenatrap"]
    #[alias = "Arena Trap"]
    ArenaTrap,
    #[string = "baddreams"]
    #[alias = "Bad Dreams"]
    BadDreams,
    #[string = "battlearmor"]
    #[alias = "Battle Armor"]
    BattleArmor,
    #[string = "chlorophyll"]
    Chlorophyll,
    #[string = "clearbody"]
    #[alias = "Clear Body"]
    ClearBody,
    #[string = "cloudnine"]
    #[alias = "Cloud Nine"]
    CloudNine,
    #[string = "colorchange"]
    #[alias = "Color Change"]
    ColorChange,
    #[string = "competitive"]
    Competitive,
    #[string = "cutecharm"]
    #[alias = "Cute Charm"]
    CuteCharm,
    #[string = "defiant"]
    Defiant,
    #[string = "deltastream"]
    #[alias = "Delta Stream"]
    DeltaStream,
    #[string = "desolateland"]
    #[alias = "Desolate Land"]
    DesolateLand,
    #[string = "drizzle"]
    Drizzle,
    #[string = "drought"]
    Drought,
    #[string = "dryskin"]
    #[alias = "Dry Skin"]
    DrySkin,
    #[string = "effectspore"]
    #[alias = "Effect Spore"]
    EffectSpore,
    #[string = "electricsurge"]
    #[alias = "Electric Surge"]
    ElectricSurge,
    #[string = "emergencyexit"]
    #[alias = "Emergency Exit"]
    EmergencyExit,
    #[string = "filter"]
    Filter,
    #[string = "flamebody"]
    #[alias = "Flame Body"]
    FlameBody,
    #[string = "flashfire"]
    #[alias = "Flash Fire"]
    FlashFire,
    #[string = "flowergift"]
    #[alias = "Flower Gift"]
    FlowerGift,
    #[string = "forecast"]
    Forecast,
    #[string = "grassysurge"]
    #[alias = "Grassy Surge"]
    GrassySurge,
    #[string = "guts"]
    Guts,
    #[string = "hugepower"]
    #[alias = "Huge Power"]
    HugePower,
    #[string = "hypercutter"]
    #[alias = "Hyper Cutter"]
    HyperCutter,
    #[string = "icebody"]
    #[alias = "Ice Body"]
    IceBody,
    #[string = "immunity"]
    Immunity,
    #[string = "innerfocus"]
    #[alias = "Inner Focus"]
    InnerFocus,
    #[string = "insomnia"]
    Insomnia,
    #[string = "intimidate"]
    Intimidate,
    #[string = "ironbarbs"]
    #[alias = "Iron Barbs"]
    IronBarbs,
    #[string = "ironfist"]
    #[alias = "Iron Fist"]
    IronFist,
    #[string = "justified"]
    Justified,
    #[string = "keeneye"]
    #[alias = "Keen Eye"]
    KeenEye,
    #[string = "leafguard"]
    #[alias = "Leaf Guard"]
    LeafGuard,
    #[string = "levitate"]
    Levitate,
    #[string = "limber"]
    Limber,
    #[string = "magician"]
    Magician,
    #[string = "magnetpull"]
    #[alias = "Magnet Pull"]
    MagnetPull,
    #[string = "moldbreaker"]
    #[alias = "Mold Breaker"]
    MoldBreaker,
    #[string = "motordrive"]
    #[alias = "Motor Drive"]
    MotorDrive,
    #[string = "moxie"]
    Moxie,
    #[string = "multiscale"]
    Multiscale,
    #[string = "naturalcure"]
    #[alias = "Natural Cure"]
    NaturalCure,
    #[string = "neutralizinggas"]
    #[alias = "Neutralizing Gas"]
    NeutralizingGas,
    #[string = "oblivious"]
    Oblivious,
    #[string = "overcoat"]
    Overcoat,
    #[string = "owntempo"]
    #[alias = "Own Tempo"]
    OwnTempo,
    #[string = "pastelveil"]
    #[alias = "Pastel Veil"]
    PastelVeil,
    #[string = "pickpocket"]
    Pickpocket,
    #[string = "pickup"]
    Pickup,
    #[string = "pixilate"]
    Pixilate,
    #[string = "poisonpoint"]
    #[alias = "Poison Point"]
    PoisonPoint,
    #[string = "poisontouch"]
    #[alias = "Poison Touch"]
    PoisonTouch,
    #[string = "pressure"]
    Pressure,
    #[string = "primordialsea"]
    #[alias = "Primordial Sea"]
    PrimordialSea,
    #[string = "protosynthesis"]
    Protosynthesis,
    #[string = "quarkdrive"]
    #[alias = "Quark Drive"]
    QuarkDrive,
    #[string = "raindish"]
    #[alias = "Rain Dish"]
    RainDish,
    #[string = "rattled"]
    Rattled,
    #[string = "receiver"]
    Receiver,
    #[string = "refrigerate"]
    Refrigerate,
    #[string = "regenerator"]
    Regenerator,
    #[string = "rockhead"]
    #[alias = "Rock Head"]
    RockHead,
    #[string = "roughskin"]
    #[alias = "Rough Skin"]
    RoughSkin,
    #[string = "sandrush"]
    #[alias = "Sand Rush"]
    SandRush,
    #[string = "sandspit"]
    #[alias = "Sand Spit"]
    SandSpit,
    #[string = "sandstream"]
    #[alias = "Sand Stream"]
    SandStream,
    #[string = "sandveil"]
    #[alias = "Sand Veil"]
    SandVeil,
    #[string = "schooling"]
    Schooling,
    #[string = "shadowtag"]
    #[alias = "Shadow Tag"]
    ShadowTag,
    #[string = "shedskin"]
    #[alias = "Shed Skin"]
    ShedSkin,
    #[string = "shellarmor"]
    #[alias = "Shell Armor"]
    ShellArmor,
    #[string = "snowwarning"]
    #[alias = "Snow Warning"]
    SnowWarning,
    #[string = "solarpower"]
    #[alias = "Solar Power"]
    SolarPower,
    #[string = "solidrock"]
    #[alias = "Solid Rock"]
    SolidRock,
    #[string = "soulheart"]
    #[alias = "Soul Heart"]
    SoulHeart,
    #[string = "speedboost"]
    #[alias = "Speed Boost"]
    SpeedBoost,
    #[string = "stamina"]
    Stamina,
    #[string = "static"]
    Static,
    #[string = "superluck"]
    #[alias = "Super Luck"]
    SuperLuck,
    #[string = "swiftswim"]
    #[alias = "Swift Swim"]
    SwiftSwim,
    #[string = "swordofruin"]
    #[alias = "Sword of Ruin"]
    SwordOfRuin,
    #[string = "synchronize"]
    Synchronize,
    #[string = "tabletsofruin"]
    #[alias = "Tablets of Ruin"]
    TabletsOfRuin,
    #[string = "technician"]
    Technician,
    #[string = "thickfat"]
    #[alias = "Thick Fat"]
    ThickFat,
    #[string = "trace"]
    Trace,
    #[string = "unburden"]
    Unburden,
    #[string = "vitalspirit"]
    #[alias = "Vital Spirit"]
    VitalSpirit,
    #[string = "voltabsorb"]
    #[alias = "Volt Absorb"]
    VoltAbsorb,
    #[string = "waterabsorb"]
    #[alias = "Water Absorb"]
    WaterAbsorb,
    #[string = "waterveil"]
    #[alias = "Water Veil"]
    WaterVeil,
    #[string = "weakarmor"]
    #[alias = "Weak Armor"]
    WeakArmor,
    #[string = "whitesmoke"]
    #[alias = "White Smoke"]
    WhiteSmoke,
    #[string = "wimpout"]
    #[alias = "Wimp Out"]
    WimpOut,
    #[string = "wonderguard"]
    #[alias = "Wonder Guard"]
    WonderGuard,
}
