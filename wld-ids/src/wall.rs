//! Wall type ids. Id 0 is "no wall" and never appears in a decoded tile.

id_table! {
    1 => STONE = "Stone",
    2 => DIRT_UNSAFE = "DirtUnsafe",
    3 => EBONSTONE_UNSAFE = "EbonstoneUnsafe",
    4 => WOOD = "Wood",
    5 => GRAY_BRICK = "GrayBrick",
    6 => RED_BRICK = "RedBrick",
    7 => BLUE_DUNGEON_UNSAFE = "BlueDungeonUnsafe",
    8 => GREEN_DUNGEON_UNSAFE = "GreenDungeonUnsafe",
    9 => PINK_DUNGEON_UNSAFE = "PinkDungeonUnsafe",
    10 => GOLD_BRICK = "GoldBrick",
    11 => SILVER_BRICK = "SilverBrick",
    12 => COPPER_BRICK = "CopperBrick",
    13 => HELLSTONE_BRICK_UNSAFE = "HellstoneBrickUnsafe",
    14 => OBSIDIAN_BRICK_UNSAFE = "ObsidianBrickUnsafe",
    15 => MUD_UNSAFE = "MudUnsafe",
    16 => DIRT = "Dirt",
    17 => BLUE_DUNGEON = "BlueDungeon",
    18 => GREEN_DUNGEON = "GreenDungeon",
    19 => PINK_DUNGEON = "PinkDungeon",
    20 => OBSIDIAN_BRICK = "ObsidianBrick",
    21 => GLASS = "Glass",
    22 => PEARLSTONE_BRICK = "PearlstoneBrick",
    23 => IRIDESCENT_BRICK = "IridescentBrick",
    24 => MUDSTONE_BRICK = "MudstoneBrick",
    25 => COBALT_BRICK = "CobaltBrick",
    26 => MYTHRIL_BRICK = "MythrilBrick",
    27 => PLANKED = "Planked",
    28 => PEARLSTONE_BRICK_UNSAFE = "PearlstoneBrickUnsafe",
    29 => CANDY_CANE = "CandyCane",
    30 => GREEN_CANDY_CANE = "GreenCandyCane",
    31 => SNOW_BRICK = "SnowBrick",
    32 => ADAMANTITE_BEAM = "AdamantiteBeam",
    33 => DEMONITE_BRICK = "DemoniteBrick",
    34 => SANDSTONE_BRICK = "SandstoneBrick",
    35 => EBONSTONE_BRICK = "EbonstoneBrick",
    36 => RED_STUCCO = "RedStucco",
    37 => YELLOW_STUCCO = "YellowStucco",
    38 => GREEN_STUCCO = "GreenStucco",
    39 => GRAY = "Gray",
    40 => SNOW_WALL_UNSAFE = "SnowWallUnsafe",
    41 => EBONWOOD = "Ebonwood",
    42 => RICH_MAOGANY = "RichMaogany",
    43 => PEARLWOOD = "Pearlwood",
    44 => RAINBOW_BRICK = "RainbowBrick",
    45 => TIN_BRICK = "TinBrick",
    46 => TUNGSTEN_BRICK = "TungstenBrick",
    47 => PLATINUM_BRICK = "PlatinumBrick",
    48 => AMETHYST_UNSAFE = "AmethystUnsafe",
    49 => TOPAZ_UNSAFE = "TopazUnsafe",
    50 => SAPPHIRE_UNSAFE = "SapphireUnsafe",
    51 => EMERALD_UNSAFE = "EmeraldUnsafe",
    52 => RUBY_UNSAFE = "RubyUnsafe",
    53 => DIAMOND_UNSAFE = "DiamondUnsafe",
    54 => CAVE_UNSAFE = "CaveUnsafe",
    55 => CAVE2_UNSAFE = "Cave2Unsafe",
    56 => CAVE3_UNSAFE = "Cave3Unsafe",
    57 => CAVE4_UNSAFE = "Cave4Unsafe",
    58 => CAVE5_UNSAFE = "Cave5Unsafe",
    59 => CAVE6_UNSAFE = "Cave6Unsafe",
    60 => LIVING_LEAF = "LivingLeaf",
    61 => CAVE7_UNSAFE = "Cave7Unsafe",
    62 => SPIDER_UNSAFE = "SpiderUnsafe",
    63 => GRASS_UNSAFE = "GrassUnsafe",
    64 => JUNGLE_UNSAFE = "JungleUnsafe",
    65 => FLOWER_UNSAFE = "FlowerUnsafe",
    66 => GRASS = "Grass",
    67 => JUNGLE = "Jungle",
    68 => FLOWER = "Flower",
    69 => CORRUPT_GRASS_UNSAFE = "CorruptGrassUnsafe",
    70 => HALLOWED_GRASS_UNSAFE = "HallowedGrassUnsafe",
    71 => ICE_UNSAFE = "IceUnsafe",
    72 => CACTUS = "Cactus",
    73 => CLOUD = "Cloud",
    74 => MUSHROOM = "Mushroom",
    75 => BONE = "Bone",
    76 => SLIME = "Slime",
    77 => FLESH = "Flesh",
    78 => LIVING_WOOD = "LivingWood",
    79 => OBSIDIAN_BACK_UNSAFE = "ObsidianBackUnsafe",
    80 => MUSHROOM_UNSAFE = "MushroomUnsafe",
    81 => CRIMSON_GRASS_UNSAFE = "CrimsonGrassUnsafe",
    82 => DISC_WALL = "DiscWall",
    83 => CRIMSTONE_UNSAFE = "CrimstoneUnsafe",
    84 => ICE_BRICK = "IceBrick",
    85 => SHADEWOOD = "Shadewood",
    86 => HIVE_UNSAFE = "HiveUnsafe",
    87 => LIHZAHRD_BRICK_UNSAFE = "LihzahrdBrickUnsafe",
    88 => PURPLE_STAINED_GLASS = "PurpleStainedGlass",
    89 => YELLOW_STAINED_GLASS = "YellowStainedGlass",
    90 => BLUE_STAINED_GLASS = "BlueStainedGlass",
    91 => GREEN_STAINED_GLASS = "GreenStainedGlass",
    92 => RED_STAINED_GLASS = "RedStainedGlass",
    93 => RAINBOW_STAINED_GLASS = "RainbowStainedGlass",
    94 => BLUE_DUNGEON_SLAB_UNSAFE = "BlueDungeonSlabUnsafe",
    95 => BLUE_DUNGEON_TILE_UNSAFE = "BlueDungeonTileUnsafe",
    96 => PINK_DUNGEON_SLAB_UNSAFE = "PinkDungeonSlabUnsafe",
    97 => PINK_DUNGEON_TILE_UNSAFE = "PinkDungeonTileUnsafe",
    98 => GREEN_DUNGEON_SLAB_UNSAFE = "GreenDungeonSlabUnsafe",
    99 => GREEN_DUNGEON_TILE_UNSAFE = "GreenDungeonTileUnsafe",
    100 => BLUE_DUNGEON_SLAB = "BlueDungeonSlab",
    101 => BLUE_DUNGEON_TILE = "BlueDungeonTile",
    102 => PINK_DUNGEON_SLAB = "PinkDungeonSlab",
    103 => PINK_DUNGEON_TILE = "PinkDungeonTile",
    104 => GREEN_DUNGEON_SLAB = "GreenDungeonSlab",
    105 => GREEN_DUNGEON_TILE = "GreenDungeonTile",
    106 => WOODEN_FENCE = "WoodenFence",
    107 => METAL_FENCE = "MetalFence",
    108 => HIVE = "Hive",
    109 => PALLADIUM_COLUMN = "PalladiumColumn",
    110 => BUBBLEGUM_BLOCK = "BubblegumBlock",
    111 => TITANSTONE_BLOCK = "TitanstoneBlock",
    112 => LIHZAHRD_BRICK = "LihzahrdBrick",
    113 => PUMPKIN = "Pumpkin",
    114 => HAY = "Hay",
    115 => SPOOKY_WOOD = "SpookyWood",
    116 => CHRISTMAS_TREE_WALLPAPER = "ChristmasTreeWallpaper",
    117 => ORNAMENT_WALLPAPER = "OrnamentWallpaper",
    118 => CANDY_CANE_WALLPAPER = "CandyCaneWallpaper",
    119 => FESTIVE_WALLPAPER = "FestiveWallpaper",
    120 => STARS_WALLPAPER = "StarsWallpaper",
    121 => SQUIGGLES_WALLPAPER = "SquigglesWallpaper",
    122 => SNOWFLAKE_WALLPAPER = "SnowflakeWallpaper",
    123 => KRAMPUS_HORN_WALLPAPER = "KrampusHornWallpaper",
    124 => BLUEGREEN_WALLPAPER = "BluegreenWallpaper",
    125 => GRINCH_FINGER_WALLPAPER = "GrinchFingerWallpaper",
    126 => FANCY_GRAY_WALLPAPER = "FancyGrayWallpaper",
    127 => ICE_FLOE_WALLPAPER = "IceFloeWallpaper",
    128 => MUSIC_WALLPAPER = "MusicWallpaper",
    129 => PURPLE_RAIN_WALLPAPER = "PurpleRainWallpaper",
    130 => RAINBOW_WALLPAPER = "RainbowWallpaper",
    131 => SPARKLE_STONE_WALLPAPER = "SparkleStoneWallpaper",
    132 => STARLIT_HEAVEN_WALLPAPER = "StarlitHeavenWallpaper",
    133 => BUBBLE_WALLPAPER = "BubbleWallpaper",
    134 => COPPER_PIPE_WALLPAPER = "CopperPipeWallpaper",
    135 => DUCKY_WALLPAPER = "DuckyWallpaper",
    136 => WATERFALL = "Waterfall",
    137 => LAVAFALL = "Lavafall",
    138 => EBONWOOD_FENCE = "EbonwoodFence",
    139 => RICH_MAHOGANY_FENCE = "RichMahoganyFence",
    140 => PEARLWOOD_FENCE = "PearlwoodFence",
    141 => SHADEWOOD_FENCE = "ShadewoodFence",
    142 => WHITE_DYNASTY = "WhiteDynasty",
    143 => BLUE_DYNASTY = "BlueDynasty",
    144 => ARCANE_RUNES = "ArcaneRunes",
    145 => IRON_FENCE = "IronFence",
    146 => COPPER_PLATING = "CopperPlating",
    147 => STONE_SLAB = "StoneSlab",
    148 => SAIL = "Sail",
    149 => BOREAL_WOOD = "BorealWood",
    150 => BOREAL_WOOD_FENCE = "BorealWoodFence",
    151 => PALM_WOOD = "PalmWood",
    152 => PALM_WOOD_FENCE = "PalmWoodFence",
    153 => AMBER_GEMSPARK = "AmberGemspark",
    154 => AMETHYST_GEMSPARK = "AmethystGemspark",
    155 => DIAMOND_GEMSPARK = "DiamondGemspark",
    156 => EMERALD_GEMSPARK = "EmeraldGemspark",
    157 => AMBER_GEMSPARK_OFF = "AmberGemsparkOff",
    158 => AMETHYST_GEMSPARK_OFF = "AmethystGemsparkOff",
    159 => DIAMOND_GEMSPARK_OFF = "DiamondGemsparkOff",
    160 => EMERALD_GEMSPARK_OFF = "EmeraldGemsparkOff",
    161 => RUBY_GEMSPARK_OFF = "RubyGemsparkOff",
    162 => SAPPHIRE_GEMSPARK_OFF = "SapphireGemsparkOff",
    163 => TOPAZ_GEMSPARK_OFF = "TopazGemsparkOff",
    164 => RUBY_GEMSPARK = "RubyGemspark",
    165 => SAPPHIRE_GEMSPARK = "SapphireGemspark",
    166 => TOPAZ_GEMSPARK = "TopazGemspark",
    167 => TIN_PLATING = "TinPlating",
    168 => CONFETTI = "Confetti",
    169 => CONFETTI_BLACK = "ConfettiBlack",
    170 => CAVE_WALL = "CaveWall",
    171 => CAVE_WALL2 = "CaveWall2",
    172 => HONEYFALL = "Honeyfall",
    173 => CHLOROPHYTE_BRICK = "ChlorophyteBrick",
    174 => CRIMTANE_BRICK = "CrimtaneBrick",
    175 => SHROOMITE_PLATING = "ShroomitePlating",
    176 => MARTIAN_CONDUIT = "MartianConduit",
    177 => HELLSTONE_BRICK = "HellstoneBrick",
    178 => MARBLE_UNSAFE = "MarbleUnsafe",
    179 => MARBLE_BLOCK = "MarbleBlock",
    180 => GRANITE_UNSAFE = "GraniteUnsafe",
    181 => GRANITE_BLOCK = "GraniteBlock",
    182 => METEORITE_BRICK = "MeteoriteBrick",
    183 => MARBLE = "Marble",
    184 => GRANITE = "Granite",
    185 => CAVE8_UNSAFE = "Cave8Unsafe",
    186 => CRYSTAL = "Crystal",
    187 => SANDSTONE = "Sandstone",
    188 => CORRUPTION_UNSAFE1 = "CorruptionUnsafe1",
    189 => CORRUPTION_UNSAFE2 = "CorruptionUnsafe2",
    190 => CORRUPTION_UNSAFE3 = "CorruptionUnsafe3",
    191 => CORRUPTION_UNSAFE4 = "CorruptionUnsafe4",
    192 => CRIMSON_UNSAFE1 = "CrimsonUnsafe1",
    193 => CRIMSON_UNSAFE2 = "CrimsonUnsafe2",
    194 => CRIMSON_UNSAFE3 = "CrimsonUnsafe3",
    195 => CRIMSON_UNSAFE4 = "CrimsonUnsafe4",
    196 => DIRT_UNSAFE1 = "DirtUnsafe1",
    197 => DIRT_UNSAFE2 = "DirtUnsafe2",
    198 => DIRT_UNSAFE3 = "DirtUnsafe3",
    199 => DIRT_UNSAFE4 = "DirtUnsafe4",
    200 => HALLOW_UNSAFE1 = "HallowUnsafe1",
    201 => HALLOW_UNSAFE2 = "HallowUnsafe2",
    202 => HALLOW_UNSAFE3 = "HallowUnsafe3",
    203 => HALLOW_UNSAFE4 = "HallowUnsafe4",
    204 => JUNGLE_UNSAFE1 = "JungleUnsafe1",
    205 => JUNGLE_UNSAFE2 = "JungleUnsafe2",
    206 => JUNGLE_UNSAFE3 = "JungleUnsafe3",
    207 => JUNGLE_UNSAFE4 = "JungleUnsafe4",
    208 => LAVA_UNSAFE1 = "LavaUnsafe1",
    209 => LAVA_UNSAFE2 = "LavaUnsafe2",
    210 => LAVA_UNSAFE3 = "LavaUnsafe3",
    211 => LAVA_UNSAFE4 = "LavaUnsafe4",
    212 => ROCKS_UNSAFE1 = "RocksUnsafe1",
    213 => ROCKS_UNSAFE2 = "RocksUnsafe2",
    214 => ROCKS_UNSAFE3 = "RocksUnsafe3",
    215 => ROCKS_UNSAFE4 = "RocksUnsafe4",
    216 => HARDENED_SAND = "HardenedSand",
    217 => CORRUPT_HARDENED_SAND = "CorruptHardenedSand",
    218 => CRIMSON_HARDENED_SAND = "CrimsonHardenedSand",
    219 => HALLOW_HARDENED_SAND = "HallowHardenedSand",
    220 => CORRUPT_SANDSTONE = "CorruptSandstone",
    221 => CRIMSON_SANDSTONE = "CrimsonSandstone",
    222 => HALLOW_SANDSTONE = "HallowSandstone",
    223 => DESERT_FOSSIL = "DesertFossil",
    224 => LUNAR_BRICK_WALL = "LunarBrickWall",
    225 => COG_WALL = "CogWall",
    226 => SAND_FALL = "SandFall",
    227 => SNOW_FALL = "SnowFall",
    228 => SILLY_BALLOON_PINK_WALL = "SillyBalloonPinkWall",
    229 => SILLY_BALLOON_PURPLE_WALL = "SillyBalloonPurpleWall",
    230 => SILLY_BALLOON_GREEN_WALL = "SillyBalloonGreenWall",
    231 => IRON_BRICK = "IronBrick",
    232 => LEAD_BRICK = "LeadBrick",
    233 => LESION_BLOCK = "LesionBlock",
    234 => CRIMSTONE_BRICK = "CrimstoneBrick",
    235 => SMOOTH_SANDSTONE = "SmoothSandstone",
    236 => SPIDER = "Spider",
    237 => SOLAR_BRICK = "SolarBrick",
    238 => VORTEX_BRICK = "VortexBrick",
    239 => NEBULA_BRICK = "NebulaBrick",
    240 => STARDUST_BRICK = "StardustBrick",
    241 => ORANGE_STAINED_GLASS = "OrangeStainedGlass",
    242 => GOLD_STARRY_GLASS_WALL = "GoldStarryGlassWall",
    243 => BLUE_STARRY_GLASS_WALL = "BlueStarryGlassWall",
    244 => LIVING_WOOD_UNSAFE = "LivingWoodUnsafe",
    245 => WROUGHT_IRON_FENCE = "WroughtIronFence",
    246 => EBONSTONE_ECHO = "EbonstoneEcho",
    247 => MUD_WALL_ECHO = "MudWallEcho",
    248 => PEARLSTONE_ECHO = "PearlstoneEcho",
    249 => SNOW_WALL_ECHO = "SnowWallEcho",
    250 => AMETHYST_ECHO = "AmethystEcho",
    251 => TOPAZ_ECHO = "TopazEcho",
    252 => SAPPHIRE_ECHO = "SapphireEcho",
    253 => EMERALD_ECHO = "EmeraldEcho",
    254 => RUBY_ECHO = "RubyEcho",
    255 => DIAMOND_ECHO = "DiamondEcho",
    256 => CAVE1_ECHO = "Cave1Echo",
    257 => CAVE2_ECHO = "Cave2Echo",
    258 => CAVE3_ECHO = "Cave3Echo",
    259 => CAVE4_ECHO = "Cave4Echo",
    260 => CAVE5_ECHO = "Cave5Echo",
    261 => CAVE6_ECHO = "Cave6Echo",
    262 => CAVE7_ECHO = "Cave7Echo",
    263 => SPIDER_ECHO = "SpiderEcho",
    264 => CORRUPT_GRASS_ECHO = "CorruptGrassEcho",
    265 => HALLOWED_GRASS_ECHO = "HallowedGrassEcho",
    266 => ICE_ECHO = "IceEcho",
    267 => OBSIDIAN_BACK_ECHO = "ObsidianBackEcho",
    268 => CRIMSON_GRASS_ECHO = "CrimsonGrassEcho",
    269 => CRIMSTONE_ECHO = "CrimstoneEcho",
    270 => CAVE_WALL1_ECHO = "CaveWall1Echo",
    271 => CAVE_WALL2_ECHO = "CaveWall2Echo",
    272 => CAVE8_ECHO = "Cave8Echo",
    273 => CORRUPTION1_ECHO = "Corruption1Echo",
    274 => CORRUPTION2_ECHO = "Corruption2Echo",
    275 => CORRUPTION3_ECHO = "Corruption3Echo",
    276 => CORRUPTION4_ECHO = "Corruption4Echo",
    277 => CRIMSON1_ECHO = "Crimson1Echo",
    278 => CRIMSON2_ECHO = "Crimson2Echo",
    279 => CRIMSON3_ECHO = "Crimson3Echo",
    280 => CRIMSON4_ECHO = "Crimson4Echo",
    281 => DIRT1_ECHO = "Dirt1Echo",
    282 => DIRT2_ECHO = "Dirt2Echo",
    283 => DIRT3_ECHO = "Dirt3Echo",
    284 => DIRT4_ECHO = "Dirt4Echo",
    285 => HALLOW1_ECHO = "Hallow1Echo",
    286 => HALLOW2_ECHO = "Hallow2Echo",
    287 => HALLOW3_ECHO = "Hallow3Echo",
    288 => HALLOW4_ECHO = "Hallow4Echo",
    289 => JUNGLE1_ECHO = "Jungle1Echo",
    290 => JUNGLE2_ECHO = "Jungle2Echo",
    291 => JUNGLE3_ECHO = "Jungle3Echo",
    292 => JUNGLE4_ECHO = "Jungle4Echo",
    293 => LAVA1_ECHO = "Lava1Echo",
    294 => LAVA2_ECHO = "Lava2Echo",
    295 => LAVA3_ECHO = "Lava3Echo",
    296 => LAVA4_ECHO = "Lava4Echo",
    297 => ROCKS1_ECHO = "Rocks1Echo",
    298 => ROCKS2_ECHO = "Rocks2Echo",
    299 => ROCKS3_ECHO = "Rocks3Echo",
    300 => ROCKS4_ECHO = "Rocks4Echo",
    301 => HARDENED_SAND_ECHO = "HardenedSandEcho",
    302 => CORRUPT_HARDENED_SAND_ECHO = "CorruptHardenedSandEcho",
    303 => CRIMSON_HARDENED_SAND_ECHO = "CrimsonHardenedSandEcho",
    304 => HALLOW_HARDENED_SAND_ECHO = "HallowHardenedSandEcho",
    305 => CORRUPT_SANDSTONE_ECHO = "CorruptSandstoneEcho",
    306 => CRIMSON_SANDSTONE_ECHO = "CrimsonSandstoneEcho",
    307 => HALLOW_SANDSTONE_ECHO = "HallowSandstoneEcho",
    308 => DESERT_FOSSIL_ECHO = "DesertFossilEcho",
    309 => BAMBOO_BLOCK_WALL = "BambooBlockWall",
    310 => LARGE_BAMBOO_BLOCK_WALL = "LargeBambooBlockWall",
    311 => AMBER_STONE_WALL_ECHO = "AmberStoneWallEcho",
    312 => BAMBOO_FENCE = "BambooFence",
    313 => ASH_WOOD = "AshWood",
    314 => POOP_WALL = "PoopWall",
    315 => SHIMMER_BRICK_WALL = "ShimmerBrickWall",
    316 => LUNAR_RUST_BRICK_WALL = "LunarRustBrickWall",
    317 => DARK_CELESTIAL_BRICK_WALL = "DarkCelestialBrickWall",
    318 => ASTRA_BRICK_WALL = "AstraBrickWall",
    319 => COSMIC_EMBER_BRICK_WALL = "CosmicEmberBrickWall",
    320 => CRYOCORE_BRICK_WALL = "CryocoreBrickWall",
    321 => MERCURY_BRICK_WALL = "MercuryBrickWall",
    322 => STAR_ROYALE_BRICK_WALL = "StarRoyaleBrickWall",
    323 => HEAVENFORGE_BRICK_WALL = "HeavenforgeBrickWall",
    324 => ANCIENT_BLUE_BRICK_WALL = "AncientBlueBrickWall",
    325 => ANCIENT_GREEN_BRICK_WALL = "AncientGreenBrickWall",
    326 => ANCIENT_PINK_BRICK_WALL = "AncientPinkBrickWall",
    327 => ANCIENT_GOLD_BRICK_WALL = "AncientGoldBrickWall",
    328 => ANCIENT_SILVER_BRICK_WALL = "AncientSilverBrickWall",
    329 => ANCIENT_COPPER_BRICK_WALL = "AncientCopperBrickWall",
    330 => ANCIENT_COBALT_BRICK_WALL = "AncientCobaltBrickWall",
    331 => ANCIENT_MYTHRIL_BRICK_WALL = "AncientMythrilBrickWall",
    332 => ANCIENT_OBSIDIAN_BRICK_WALL = "AncientObsidianBrickWall",
    333 => ANCIENT_HELLSTONE_BRICK_WALL = "AncientHellstoneBrickWall",
    334 => LAVA_MOSS_WALL = "LavaMossWall",
    335 => KRYPTON_MOSS_WALL = "KryptonMossWall",
    336 => XENON_MOSS_WALL = "XenonMossWall",
    337 => ARGON_MOSS_WALL = "ArgonMossWall",
    338 => VIOLET_MOSS_WALL = "VioletMossWall",
    339 => RAINBOW_MOSS_WALL = "RainbowMossWall",
    340 => GREEN_MOSS_WALL = "GreenMossWall",
    341 => BROWN_MOSS_WALL = "BrownMossWall",
    342 => RED_MOSS_WALL = "RedMossWall",
    343 => BLUE_MOSS_WALL = "BlueMossWall",
    344 => PURPLE_MOSS_WALL = "PurpleMossWall",
    345 => AETHERIUM_BRICK_WALL = "AetheriumBrickWall",
    346 => REEF_WALL = "ReefWall",
}
